use crate::api::{ArgumentConfig, ValidationError, ValidationRule};
use crate::model::{ArgKind, ArgValue, ConfigError};

/// The immutable descriptor for a single command line argument (positional
/// value or named option).
///
/// Built once at command definition time via [`Argument::new`]; read-only
/// thereafter.
/// The surrounding framework consults it repeatedly, for usage text and for
/// validating each incoming value, without re-validation of its own
/// configuration.
#[derive(Debug)]
pub struct Argument {
    name: String,
    description: Option<String>,
    kind: ArgKind,
    required: bool,
    default: Option<ArgValue>,
    banner: Option<String>,
    choices: Option<Vec<String>>,
    validations: Vec<(String, ValidationRule)>,
}

impl Argument {
    /// Construct a descriptor from a name and a configuration bundle,
    /// rejecting invalid combinations immediately.
    ///
    /// ### Example
    /// ```
    /// use declarg::{ArgKind, Argument, ArgumentConfig};
    ///
    /// let count = Argument::new(
    ///     "count",
    ///     ArgumentConfig::new()
    ///         .kind(ArgKind::Numeric)
    ///         .required(false)
    ///         .default(0),
    /// )
    /// .unwrap();
    /// assert_eq!(count.usage(), "[N]");
    /// ```
    pub fn new(name: impl Into<String>, config: ArgumentConfig) -> Result<Self, ConfigError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }

        let kind = config.kind.unwrap_or_default();
        let required = config.required.unwrap_or(true);

        if required && config.default.is_some() {
            return Err(ConfigError::RequiredWithDefault(name));
        }

        let choices = match config.choices {
            None => None,
            Some(ArgValue::Sequence(values)) => Some(values),
            Some(_) => return Err(ConfigError::ChoicesNotSequence(name)),
        };
        let banner = config.banner.or_else(|| default_banner(kind, &name));

        Ok(Self {
            name,
            description: config.desc,
            kind,
            required,
            default: config.default,
            banner,
            choices,
            validations: config.validations,
        })
    }

    /// The argument's identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alias of [`Argument::name`].
    pub fn human_name(&self) -> &str {
        &self.name
    }

    /// The configured description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The kind of the argument's values.
    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    /// Whether the argument must be supplied.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The default value taken when the argument is not supplied.
    pub fn default(&self) -> Option<&ArgValue> {
        self.default.as_ref()
    }

    /// The display token for usage strings; `None` for boolean arguments
    /// without an explicit banner.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// The enum restriction: the closed, ordered set of acceptable values,
    /// if configured.
    pub fn choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }

    /// The usage token for this argument: the banner raw when required,
    /// wrapped in optional-argument brackets otherwise.
    pub fn usage(&self) -> String {
        let banner = self.banner.as_deref().unwrap_or("");

        if self.required {
            banner.to_string()
        } else {
            format!("[{banner}]")
        }
    }

    /// Whether the default is worth displaying in help text: present and,
    /// for container-shaped defaults, non-empty.
    pub fn show_default(&self) -> bool {
        self.default.as_ref().map_or(false, ArgValue::is_present)
    }

    /// Whether any validation rules are configured.
    /// Collaborators may use this to skip [`Argument::validate`] entirely.
    pub fn has_validations(&self) -> bool {
        !self.validations.is_empty()
    }

    /// Check a runtime value against the configured rules, in the order they
    /// were added, stopping at the first failing rule.
    /// Trivially succeeds when no rules are configured.
    ///
    /// ### Example
    /// ```
    /// use declarg::{ArgValue, Argument, ArgumentConfig, ValidationRule};
    ///
    /// let name = Argument::new(
    ///     "name",
    ///     ArgumentConfig::new().validation(
    ///         "must be lower case",
    ///         ValidationRule::pattern(regex::Regex::new("^[a-z]+$").unwrap()),
    ///     ),
    /// )
    /// .unwrap();
    /// assert!(name.validate(&ArgValue::from("abc")).is_ok());
    /// assert!(name.validate(&ArgValue::from("ABC")).is_err());
    /// ```
    pub fn validate(&self, value: &ArgValue) -> Result<(), ValidationError> {
        for (message, rule) in &self.validations {
            if !rule.accepts(value) {
                return Err(ValidationError {
                    name: self.name.clone(),
                    value: value.to_string(),
                    message: message.clone(),
                    usage: self.usage(),
                    description: self.description.clone().unwrap_or_default(),
                });
            }
        }

        Ok(())
    }
}

fn default_banner(kind: ArgKind, name: &str) -> Option<String> {
    match kind {
        ArgKind::Boolean => None,
        ArgKind::String | ArgKind::Default => Some(name.to_uppercase()),
        ArgKind::Numeric => Some("N".to_string()),
        ArgKind::Hash => Some("key:value".to_string()),
        ArgKind::Array => Some("one two three".to_string()),
    }
}
