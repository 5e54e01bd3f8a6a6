//! Denylist rule - rejects passwords that exactly match a common password.

use crate::denylist::Denylist;
use secrecy::{ExposeSecret, SecretString};
use super::{RuleResult, Violation};

/// Checks the password against the denylist (case-insensitive exact match).
pub fn denylist_rule(password: &SecretString, denylist: &Denylist) -> RuleResult {
    if denylist.contains(password.expose_secret()) {
        return Some(Violation::TooCommon);
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
    fn test_denylist_rule_builtin_entries() {
        let denylist = Denylist::builtin();
        for pwd in ["password", "12345678", "admin", "password123"] {
            assert_eq!(denylist_rule(&secret(pwd), &denylist), Some(Violation::TooCommon));
        }
    }

    #[test]
    fn test_denylist_rule_case_insensitive() {
        let denylist = Denylist::builtin();
        assert_eq!(denylist_rule(&secret("PassWord"), &denylist), Some(Violation::TooCommon));
        assert_eq!(denylist_rule(&secret("ADMIN"), &denylist), Some(Violation::TooCommon));
    }

    #[test]
    fn test_denylist_rule_exact_match_only() {
        let denylist = Denylist::builtin();
        assert_eq!(denylist_rule(&secret("password1234"), &denylist), None);
        assert_eq!(denylist_rule(&secret(" admin"), &denylist), None);
        assert_eq!(denylist_rule(&secret("Password123!"), &denylist), None);
    }
}
