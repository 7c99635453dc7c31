use regex::Regex;
use thiserror::Error;

use crate::model::ArgValue;

/// A named check applied to a runtime argument value.
/// Used with [`ArgumentConfig::validation`](./struct.ArgumentConfig.html#method.validation).
///
/// The two cases are resolved at configuration time; there is no runtime
/// probing of what shape a rule takes.
pub enum ValidationRule {
    /// A callable invoked with the value; `false` fails the check.
    Predicate(Box<dyn Fn(&ArgValue) -> bool>),
    /// A pattern matched against the value's display form; no match fails the
    /// check.
    Pattern(Regex),
}

impl ValidationRule {
    /// Create a predicate rule.
    ///
    /// ### Example
    /// ```
    /// use declarg::{ArgValue, ValidationRule};
    ///
    /// ValidationRule::predicate(|value| match value {
    ///     ArgValue::Number(n) => *n > 0.0,
    ///     _ => false,
    /// });
    /// ```
    pub fn predicate(check: impl Fn(&ArgValue) -> bool + 'static) -> Self {
        ValidationRule::Predicate(Box::new(check))
    }

    /// Create a pattern rule.
    ///
    /// ### Example
    /// ```
    /// use declarg::ValidationRule;
    /// use regex::Regex;
    ///
    /// ValidationRule::pattern(Regex::new("^[a-z]+$").unwrap());
    /// ```
    pub fn pattern(pattern: Regex) -> Self {
        ValidationRule::Pattern(pattern)
    }

    /// Whether the rule accepts the value.
    pub(crate) fn accepts(&self, value: &ArgValue) -> bool {
        match self {
            ValidationRule::Predicate(check) => check(value),
            ValidationRule::Pattern(pattern) => pattern.is_match(&value.to_string()),
        }
    }
}

impl std::fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationRule::Predicate(_) => write!(f, "Predicate[..]"),
            ValidationRule::Pattern(pattern) => write!(f, "Pattern[{pattern}]"),
        }
    }
}

/// A runtime value failed one of the argument's configured rules.
/// Carries the context a framework needs to present a user-facing diagnostic:
/// the argument name, the offending value, the rule's message, and the
/// argument's formatted usage plus description.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "validation failed for argument value:\n  Argument: {name}\n  Value: {value}\n  Error: {message}\n  Usage: {usage} # {description}"
)]
pub struct ValidationError {
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) message: String,
    pub(crate) usage: String,
    pub(crate) description: String,
}

impl ValidationError {
    /// The name of the argument whose rule failed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display form of the offending value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The failing rule's configured message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The argument's formatted usage token.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// The argument's description, empty when none was configured.
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use rstest::rstest;

    #[rstest]
    #[case(ArgValue::Number(1.0), true)]
    #[case(ArgValue::Number(0.0), false)]
    #[case(ArgValue::Number(-1.0), false)]
    #[case(ArgValue::Bool(true), false)]
    fn predicate_accepts(#[case] value: ArgValue, #[case] expected: bool) {
        let rule = ValidationRule::predicate(|value| match value {
            ArgValue::Number(n) => *n > 0.0,
            _ => false,
        });

        assert_eq!(rule.accepts(&value), expected);
    }

    #[rstest]
    #[case(ArgValue::from("abc"), true)]
    #[case(ArgValue::from("a1c"), false)]
    #[case(ArgValue::from(""), false)]
    #[case(ArgValue::from(vec!["ab", "cd"]), false)]
    fn pattern_accepts(#[case] value: ArgValue, #[case] expected: bool) {
        let rule = ValidationRule::pattern(Regex::new("^[a-z]+$").unwrap());

        assert_eq!(rule.accepts(&value), expected);
    }

    #[test]
    fn validation_error_display() {
        let error = ValidationError {
            name: "count".to_string(),
            value: "-1".to_string(),
            message: "must be positive".to_string(),
            usage: "[N]".to_string(),
            description: "The count.".to_string(),
        };
        let rendered = error.to_string();

        assert_contains!(rendered, "Argument: count");
        assert_contains!(rendered, "Value: -1");
        assert_contains!(rendered, "Error: must be positive");
        assert_contains!(rendered, "Usage: [N] # The count.");
    }

    #[test]
    fn rule_debug() {
        let predicate = ValidationRule::predicate(|_| true);
        let pattern = ValidationRule::pattern(Regex::new("^a$").unwrap());

        assert_eq!(format!("{predicate:?}"), "Predicate[..]");
        assert_eq!(format!("{pattern:?}"), "Pattern[^a$]");
    }
}
