use crate::api::ValidationRule;
use crate::model::{ArgKind, ArgValue};

/// The configuration bundle recognized when constructing an
/// [`Argument`](./struct.Argument.html).
///
/// Every option is optional; unset options take the documented defaults
/// (`kind` falls back to [`ArgKind::String`], `required` to `true`).
#[derive(Debug)]
pub struct ArgumentConfig {
    pub(super) kind: Option<ArgKind>,
    pub(super) desc: Option<String>,
    pub(super) required: Option<bool>,
    pub(super) default: Option<ArgValue>,
    pub(super) banner: Option<String>,
    pub(super) choices: Option<ArgValue>,
    pub(super) validations: Vec<(String, ValidationRule)>,
}

impl ArgumentConfig {
    /// Create an empty configuration bundle.
    ///
    /// ### Example
    /// ```
    /// use declarg::ArgumentConfig;
    ///
    /// ArgumentConfig::new();
    /// ```
    pub fn new() -> Self {
        Self {
            kind: None,
            desc: None,
            required: None,
            default: None,
            banner: None,
            choices: None,
            validations: Vec::default(),
        }
    }

    /// Declare the kind of the argument's values.
    /// If repeated, only the final kind applies.
    ///
    /// ### Example
    /// ```
    /// use declarg::{ArgKind, ArgumentConfig};
    ///
    /// ArgumentConfig::new().kind(ArgKind::Numeric);
    /// ```
    pub fn kind(mut self, kind: ArgKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Document the description for the argument.
    /// If repeated, only the final description applies.
    ///
    /// ### Example
    /// ```
    /// use declarg::ArgumentConfig;
    ///
    /// ArgumentConfig::new()
    ///     .desc("--this will get discarded--")
    ///     .desc("The number of widgets to build.");
    /// ```
    pub fn desc(mut self, description: impl Into<String>) -> Self {
        self.desc = Some(description.into());
        self
    }

    /// Declare whether the argument must be supplied.
    /// Arguments are required unless configured otherwise.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Declare the default value taken when the argument is not supplied.
    /// Only valid together with `required(false)`.
    ///
    /// ### Example
    /// ```
    /// use declarg::ArgumentConfig;
    ///
    /// ArgumentConfig::new().required(false).default(0);
    /// ```
    pub fn default(mut self, default: impl Into<ArgValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Declare an explicit usage banner, overriding the kind-derived token.
    ///
    /// ### Example
    /// ```
    /// use declarg::ArgumentConfig;
    ///
    /// ArgumentConfig::new().banner("WIDGET");
    /// ```
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Declare the enum restriction: the closed, ordered set of acceptable
    /// values.
    /// Construction rejects any shape other than [`ArgValue::Sequence`].
    ///
    /// ### Example
    /// ```
    /// use declarg::ArgumentConfig;
    ///
    /// ArgumentConfig::new().choices(vec!["fast", "slow"]);
    /// ```
    pub fn choices(mut self, choices: impl Into<ArgValue>) -> Self {
        self.choices = Some(choices.into());
        self
    }

    /// Add a named validation rule, keyed by its failure message.
    /// Rules apply to runtime values in the order they are added.
    ///
    /// ### Example
    /// ```
    /// use declarg::{ArgValue, ArgumentConfig, ValidationRule};
    ///
    /// ArgumentConfig::new().validation(
    ///     "must be positive",
    ///     ValidationRule::predicate(|value| match value {
    ///         ArgValue::Number(n) => *n > 0.0,
    ///         _ => false,
    ///     }),
    /// );
    /// ```
    pub fn validation(mut self, message: impl Into<String>, rule: ValidationRule) -> Self {
        self.validations.push((message.into(), rule));
        self
    }
}
