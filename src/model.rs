use thiserror::Error;

/// The declared kind of an argument's values.
///
/// Fixed at descriptor construction; drives the derived usage banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// A numeric value.
    Numeric,
    /// A `key:value` mapping.
    Hash,
    /// A sequence of values.
    Array,
    /// A plain string value.
    String,
    /// A presence/absence switch; carries no usage token.
    Boolean,
    /// Left unspecified by the definition author; displays as a string.
    Default,
}

impl Default for ArgKind {
    fn default() -> Self {
        ArgKind::String
    }
}

impl std::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArgKind::Numeric => "numeric",
            ArgKind::Hash => "hash",
            ArgKind::Array => "array",
            ArgKind::String => "string",
            ArgKind::Boolean => "boolean",
            ArgKind::Default => "default",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for ArgKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "numeric" => Ok(ArgKind::Numeric),
            "hash" => Ok(ArgKind::Hash),
            "array" => Ok(ArgKind::Array),
            "string" => Ok(ArgKind::String),
            "boolean" => Ok(ArgKind::Boolean),
            "default" => Ok(ArgKind::Default),
            _ => Err(ConfigError::InvalidKind(value.to_string())),
        }
    }
}

/// A loosely-shaped value carried by an argument default or supplied at runtime.
///
/// Command definitions may provide plain scalars, sequences, or `key:value`
/// mappings; the mapping preserves definition order.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(f64),
    /// A string scalar.
    String(String),
    /// An ordered sequence of strings.
    Sequence(Vec<String>),
    /// An ordered sequence of `key:value` entries.
    Mapping(Vec<(String, String)>),
}

impl ArgValue {
    /// Whether this value is worth displaying: non-empty for containers and
    /// strings, truthy for scalars.
    pub(crate) fn is_present(&self) -> bool {
        match self {
            ArgValue::Bool(value) => *value,
            ArgValue::Number(_) => true,
            ArgValue::String(value) => !value.is_empty(),
            ArgValue::Sequence(values) => !values.is_empty(),
            ArgValue::Mapping(entries) => !entries.is_empty(),
        }
    }
}

impl std::fmt::Display for ArgValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgValue::Bool(value) => write!(f, "{value}"),
            ArgValue::Number(value) => write!(f, "{value}"),
            ArgValue::String(value) => write!(f, "{value}"),
            ArgValue::Sequence(values) => write!(f, "{}", values.join(" ")),
            ArgValue::Mapping(entries) => {
                let pairs: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{key}:{value}"))
                    .collect();
                write!(f, "{}", pairs.join(" "))
            }
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Number(value as f64)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Number(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::String(value)
    }
}

impl From<Vec<String>> for ArgValue {
    fn from(values: Vec<String>) -> Self {
        ArgValue::Sequence(values)
    }
}

impl From<Vec<&str>> for ArgValue {
    fn from(values: Vec<&str>) -> Self {
        ArgValue::Sequence(values.into_iter().map(|v| v.to_string()).collect())
    }
}

impl From<Vec<(String, String)>> for ArgValue {
    fn from(entries: Vec<(String, String)>) -> Self {
        ArgValue::Mapping(entries)
    }
}

impl From<Vec<(&str, &str)>> for ArgValue {
    fn from(entries: Vec<(&str, &str)>) -> Self {
        ArgValue::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// A definition-time failure: the descriptor's own configuration violates an
/// invariant.
/// Always fatal to construction; the framework treats this as a programming
/// error in the command definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The argument name was empty.
    #[error("argument name can't be empty.")]
    EmptyName,

    /// The supplied type is outside the closed kind set.
    #[error("type '{0}' is not valid for arguments.")]
    InvalidKind(String),

    /// The argument was declared required while also carrying a default.
    #[error("argument '{0}' cannot be required and have default value.")]
    RequiredWithDefault(String),

    /// The choices restriction was supplied with a non-sequence shape.
    #[error("argument '{0}' cannot have choices other than a sequence.")]
    ChoicesNotSequence(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("numeric", ArgKind::Numeric)]
    #[case("hash", ArgKind::Hash)]
    #[case("array", ArgKind::Array)]
    #[case("string", ArgKind::String)]
    #[case("boolean", ArgKind::Boolean)]
    #[case("default", ArgKind::Default)]
    fn arg_kind_from_str(#[case] input: &str, #[case] expected: ArgKind) {
        assert_eq!(ArgKind::from_str(input).unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("Numeric")]
    #[case("integer")]
    #[case("")]
    fn arg_kind_from_str_invalid(#[case] input: &str) {
        assert_matches!(
            ArgKind::from_str(input).unwrap_err(),
            ConfigError::InvalidKind(kind) => {
                assert_eq!(kind, input);
            }
        );
    }

    #[test]
    fn arg_kind_default() {
        assert_eq!(ArgKind::default(), ArgKind::String);
    }

    #[rstest]
    #[case(ArgValue::Bool(true), "true")]
    #[case(ArgValue::Bool(false), "false")]
    #[case(ArgValue::Number(0.0), "0")]
    #[case(ArgValue::Number(4.2), "4.2")]
    #[case(ArgValue::String("abc".to_string()), "abc")]
    #[case(ArgValue::from(vec!["one", "two", "three"]), "one two three")]
    #[case(ArgValue::from(vec![("key", "value"), ("a", "b")]), "key:value a:b")]
    fn arg_value_display(#[case] value: ArgValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(ArgValue::Bool(true), true)]
    #[case(ArgValue::Bool(false), false)]
    #[case(ArgValue::Number(0.0), true)]
    #[case(ArgValue::String("".to_string()), false)]
    #[case(ArgValue::String("abc".to_string()), true)]
    #[case(ArgValue::Sequence(Vec::default()), false)]
    #[case(ArgValue::from(vec!["one"]), true)]
    #[case(ArgValue::Mapping(Vec::default()), false)]
    #[case(ArgValue::from(vec![("key", "value")]), true)]
    fn arg_value_is_present(#[case] value: ArgValue, #[case] expected: bool) {
        assert_eq!(value.is_present(), expected);
    }

    #[test]
    fn arg_value_from_scalars() {
        assert_eq!(ArgValue::from(true), ArgValue::Bool(true));
        assert_eq!(ArgValue::from(3), ArgValue::Number(3.0));
        assert_eq!(ArgValue::from(4.2), ArgValue::Number(4.2));
        assert_eq!(ArgValue::from("abc"), ArgValue::String("abc".to_string()));
        assert_eq!(
            ArgValue::from("abc".to_string()),
            ArgValue::String("abc".to_string())
        );
    }
}
