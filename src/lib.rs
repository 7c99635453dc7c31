//! `declarg` is a declarative argument descriptor for command line parsers.
//!
//! An [`Argument`] describes the contract of a single command line parameter
//! (positional value or named option): its name, kind, default, requiredness,
//! allowed-value restriction, and custom validation rules.
//! The descriptor is a leaf type: tokenizing the command line, binding parsed
//! tokens, composing help text, and dispatching to handlers all live in the
//! surrounding framework.
//! What the descriptor owns is:
//! * *Construction & self-validation*:
//! An [`Argument`] is built once, at command definition time, from an
//! [`ArgumentConfig`] bundle; invalid combinations are rejected immediately
//! with a [`ConfigError`].
//! * *Usage formatting*:
//! [`Argument::usage`] derives the display token for usage strings from the
//! argument's kind and requiredness.
//! * *Value validation*:
//! [`Argument::validate`] applies the configured [`ValidationRule`]s to a
//! runtime value, failing with a [`ValidationError`] that carries enough
//! context for a user-facing diagnostic.
//!
//! # Usage
//! ```
//! use declarg::{ArgKind, Argument, ArgumentConfig, ArgValue, ValidationRule};
//!
//! let count = Argument::new(
//!     "count",
//!     ArgumentConfig::new()
//!         .kind(ArgKind::Numeric)
//!         .required(false)
//!         .default(0)
//!         .validation(
//!             "must be positive",
//!             ValidationRule::predicate(|value| match value {
//!                 ArgValue::Number(n) => *n > 0.0,
//!                 _ => false,
//!             }),
//!         ),
//! )
//! .unwrap();
//!
//! assert_eq!(count.usage(), "[N]");
//! assert!(count.validate(&ArgValue::Number(5.0)).is_ok());
//! assert!(count.validate(&ArgValue::Number(-1.0)).is_err());
//! ```
#![deny(missing_docs)]
mod api;
mod model;

pub use api::*;
pub use model::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
