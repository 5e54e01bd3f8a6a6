//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleResult, Violation};

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is measured in UTF-16 code units, the way a browser input
/// reports it: characters outside the BMP count twice.
pub fn length_rule(password: &SecretString) -> RuleResult {
    if password.expose_secret().encode_utf16().count() < MIN_LENGTH {
        return Some(Violation::TooShort);
    }
    None
}
