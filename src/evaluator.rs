//! Password policy evaluator - runs every rule and collects violations.

use secrecy::SecretString;

use crate::denylist::Denylist;
use crate::rules::{
    denylist_rule, digit_rule, length_rule, lowercase_rule, special_char_rule, uppercase_rule,
    whitespace_rule, RuleResult, Violation,
};

/// Ordered list of violations produced by one evaluation.
///
/// Empty iff the password satisfies every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violation messages in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl IntoIterator for ValidationResult {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Whether the continue action may be enabled for this result.
pub fn can_continue(result: &ValidationResult) -> bool {
    result.is_valid()
}

/// The fixed rule set bound to a denylist.
#[derive(Debug, Clone, Default)]
pub struct PasswordPolicy {
    denylist: Denylist,
}

impl PasswordPolicy {
    pub fn new(denylist: Denylist) -> Self {
        Self { denylist }
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Evaluates every rule against `password`.
    ///
    /// Rules never short-circuit: every failing rule is reported, in
    /// declaration order.
    pub fn evaluate(&self, password: &SecretString) -> ValidationResult {
        let denylist = |p: &SecretString| denylist_rule(p, &self.denylist);

        let rules: [(&str, &dyn Fn(&SecretString) -> RuleResult); 7] = [
            ("length", &length_rule),
            ("lowercase", &lowercase_rule),
            ("uppercase", &uppercase_rule),
            ("digit", &digit_rule),
            ("special", &special_char_rule),
            ("whitespace", &whitespace_rule),
            ("denylist", &denylist),
        ];

        let mut violations = Vec::new();
        for (_rule_name, rule_fn) in rules {
            if let Some(violation) = rule_fn(password) {
                #[cfg(feature = "tracing")]
                tracing::trace!(rule = _rule_name, "password rule failed");
                violations.push(violation);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(violations = violations.len(), "password evaluated");

        ValidationResult { violations }
    }
}

/// Evaluates `password` with the built-in denylist.
pub fn evaluate_password(password: &SecretString) -> ValidationResult {
    PasswordPolicy::default().evaluate(password)
}
