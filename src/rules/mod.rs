//! Password policy rules
//!
//! Each rule checks one independent requirement and reports at most one
//! [`Violation`].

mod denylist;
mod length;
mod variety;
mod whitespace;

pub use denylist::denylist_rule;
pub use length::{length_rule, MIN_LENGTH};
pub use variety::{digit_rule, lowercase_rule, special_char_rule, uppercase_rule, SPECIAL_CHARS};
pub use whitespace::whitespace_rule;

use thiserror::Error;

/// Result type for rule functions.
/// - `Some(violation)` - Rule failed
/// - `None` - Rule passed
pub type RuleResult = Option<Violation>;

/// A failed policy rule. Variants are declared in evaluation order, so the
/// derived `Ord` matches the order violations are reported in.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Violation {
    #[error("At least {} characters", MIN_LENGTH)]
    TooShort,
    #[error("One lowercase letter")]
    NoLowercase,
    #[error("One uppercase letter")]
    NoUppercase,
    #[error("One digit")]
    NoDigit,
    #[error("One special character")]
    NoSpecialChar,
    #[error("No spaces allowed")]
    ContainsWhitespace,
    #[error("Password too common")]
    TooCommon,
}

impl Violation {
    pub const ALL: [Violation; 7] = [
        Violation::TooShort,
        Violation::NoLowercase,
        Violation::NoUppercase,
        Violation::NoDigit,
        Violation::NoSpecialChar,
        Violation::ContainsWhitespace,
        Violation::TooCommon,
    ];

    /// Short stable name of the rule that produced this violation.
    pub fn rule_name(&self) -> &'static str {
        match self {
            Violation::TooShort => "length",
            Violation::NoLowercase => "lowercase",
            Violation::NoUppercase => "uppercase",
            Violation::NoDigit => "digit",
            Violation::NoSpecialChar => "special",
            Violation::ContainsWhitespace => "whitespace",
            Violation::TooCommon => "denylist",
        }
    }
}
