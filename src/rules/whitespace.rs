//! Whitespace rule - rejects passwords containing any whitespace.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleResult, Violation};

/// Whitespace and line terminators as matched by a browser's `\s`.
fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Rejects passwords containing any whitespace or line terminator.
pub fn whitespace_rule(password: &SecretString) -> RuleResult {
    if password.expose_secret().chars().any(is_browser_whitespace) {
        return Some(Violation::ContainsWhitespace);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.into())
    }

    #[test]
    fn test_whitespace_rule_space() {
        assert_eq!(whitespace_rule(&secret("Ab1! Ab1!")), Some(Violation::ContainsWhitespace));
    }

    #[test]
    fn test_whitespace_rule_tab_and_newline() {
        assert_eq!(whitespace_rule(&secret("Ab1!\tx")), Some(Violation::ContainsWhitespace));
        assert_eq!(whitespace_rule(&secret("Ab1!\n")), Some(Violation::ContainsWhitespace));
        assert_eq!(whitespace_rule(&secret("\u{00A0}")), Some(Violation::ContainsWhitespace));
    }

    #[test]
    fn test_whitespace_rule_byte_order_mark() {
        assert_eq!(
            whitespace_rule(&secret("Password123!\u{FEFF}")),
            Some(Violation::ContainsWhitespace)
        );
        assert_eq!(whitespace_rule(&secret("a\u{2009}b")), Some(Violation::ContainsWhitespace));
        assert_eq!(whitespace_rule(&secret("a\u{3000}b")), Some(Violation::ContainsWhitespace));
    }

    #[test]
    fn test_whitespace_rule_next_line_is_not_whitespace() {
        assert_eq!(whitespace_rule(&secret("Password123!\u{0085}")), None);
        assert_eq!(whitespace_rule(&secret("a\u{200B}b")), None);
    }

    #[test]
    fn test_whitespace_rule_none() {
        assert_eq!(whitespace_rule(&secret("")), None);
        assert_eq!(whitespace_rule(&secret("Password123!")), None);
    }
}
