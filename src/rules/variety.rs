//! Character class rules - lowercase, uppercase, digit and special characters.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleResult, Violation};

/// Characters accepted by [`special_char_rule`].
pub const SPECIAL_CHARS: &str = "!@#$%^&*()+=._-";

fn require(password: &SecretString, class: impl Fn(char) -> bool, violation: Violation) -> RuleResult {
    if password.expose_secret().chars().any(class) {
        None
    } else {
        Some(violation)
    }
}

/// Requires at least one ASCII lowercase letter.
pub fn lowercase_rule(password: &SecretString) -> RuleResult {
    require(password, |c| c.is_ascii_lowercase(), Violation::NoLowercase)
}

/// Requires at least one ASCII uppercase letter.
pub fn uppercase_rule(password: &SecretString) -> RuleResult {
    require(password, |c| c.is_ascii_uppercase(), Violation::NoUppercase)
}

/// Requires at least one ASCII digit.
pub fn digit_rule(password: &SecretString) -> RuleResult {
    require(password, |c| c.is_ascii_digit(), Violation::NoDigit)
}

/// Requires at least one character from [`SPECIAL_CHARS`].
pub fn special_char_rule(password: &SecretString) -> RuleResult {
    require(password, |c| SPECIAL_CHARS.contains(c), Violation::NoSpecialChar)
}
