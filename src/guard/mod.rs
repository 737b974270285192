//! Composable type guards
//!
//! A guard list is an implicit AND of guard expressions. Each expression is a
//! type token (`"string"`), a negated token (`"!null"`), a custom predicate,
//! or a nested list. A nested list is evaluated under the combinator opposite
//! to its enclosing one, so `["string", "number"]` inside the top-level AND
//! reads "string or number".
//!
//! # Example
//!
//! ```rust
//! use type_guards::{is, Guard, Value};
//!
//! // (string or plainObject) and not null
//! let guards = [
//!     Guard::group(["string", "plainObject"]),
//!     Guard::from("!null"),
//! ];
//!
//! assert_eq!(is(&Value::from("a"), &guards), Ok(true));
//! assert_eq!(is(&Value::object([("k", 1)]), &guards), Ok(true));
//! assert_eq!(is(&Value::from(1), &guards), Ok(false));
//! ```
//!
//! Guards may also arrive as dynamic [`Value`]s, the way an untyped caller
//! would pass them; [`Guard::classify`] turns them into the typed form:
//!
//! ```rust
//! use type_guards::{Guard, Value};
//!
//! let raw = Value::Array(vec![Value::from("string"), Value::function(|v| v.is_nullish())]);
//! let guard = Guard::classify(&raw).unwrap();
//! assert!(matches!(guard, Guard::Group(ref inner) if inner.len() == 2));
//!
//! assert!(Guard::classify(&Value::from(42)).unwrap_err().is_invalid_guard());
//! ```

mod entry;
mod eval;
mod plan;

use std::fmt;

use crate::error::GuardError;
use crate::value::{Callable, Value};

pub use entry::{asserts, create_filter, is, primitive, GuardEngine, GuardFilter};
pub use eval::{evaluate_all, evaluate_any, Traversal, ValueId};
pub use plan::{NameCheck, Plan};

/// Prefix that turns a token into its complement.
pub const NEGATION_MARKER: char = '!';

/// One expression in a guard list.
#[derive(Debug, Clone, PartialEq)]
pub enum Guard {
    /// A type token looked up in the active table.
    Name(String),
    /// A type token whose result is inverted.
    Negated(String),
    /// A caller-supplied predicate, called with the tested value only.
    Custom(Callable),
    /// A nested list evaluated under the opposite combinator.
    Group(Vec<Guard>),
}

impl Guard {
    /// Parse a token, honouring a leading negation marker.
    ///
    /// ```rust
    /// use type_guards::Guard;
    ///
    /// assert_eq!(Guard::token("array"), Guard::Name("array".into()));
    /// assert_eq!(Guard::token("!array"), Guard::Negated("array".into()));
    /// ```
    pub fn token(token: impl AsRef<str>) -> Self {
        let token = token.as_ref();
        match token.strip_prefix(NEGATION_MARKER) {
            Some(rest) => Guard::Negated(rest.to_string()),
            None => Guard::Name(token.to_string()),
        }
    }

    /// The complement of a token.
    pub fn negated(token: impl Into<String>) -> Self {
        Guard::Negated(token.into())
    }

    /// Wrap a closure as a custom guard.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Guard::Custom(Callable::new(f))
    }

    /// Build a nested group.
    pub fn group<I, G>(guards: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<Guard>,
    {
        Guard::Group(guards.into_iter().map(Into::into).collect())
    }

    /// Classify a dynamically-typed guard.
    ///
    /// Arrays become groups (classified recursively), functions become custom
    /// guards, strings become tokens. Anything else is rejected with
    /// [`GuardError::InvalidGuard`].
    pub fn classify(raw: &Value) -> Result<Self, GuardError> {
        match raw {
            Value::Array(items) => Self::classify_all(items).map(Guard::Group),
            Value::Function(callable) => Ok(Guard::Custom(callable.clone())),
            Value::String(token) => Ok(Guard::token(token)),
            other => Err(GuardError::InvalidGuard {
                rendered: other.to_string(),
            }),
        }
    }

    /// Classify every raw guard of a list, preserving order.
    pub fn classify_all(raws: &[Value]) -> Result<Vec<Self>, GuardError> {
        raws.iter().map(Self::classify).collect()
    }
}

impl From<&str> for Guard {
    fn from(token: &str) -> Self {
        Guard::token(token)
    }
}

impl From<String> for Guard {
    fn from(token: String) -> Self {
        Guard::token(token)
    }
}

impl From<Callable> for Guard {
    fn from(callable: Callable) -> Self {
        Guard::Custom(callable)
    }
}

impl From<Vec<Guard>> for Guard {
    fn from(guards: Vec<Guard>) -> Self {
        Guard::Group(guards)
    }
}

impl TryFrom<Value> for Guard {
    type Error = GuardError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        Guard::classify(&raw)
    }
}

impl TryFrom<&Value> for Guard {
    type Error = GuardError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        Guard::classify(raw)
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Name(token) => f.write_str(token),
            Guard::Negated(token) => write!(f, "{}{}", NEGATION_MARKER, token),
            Guard::Custom(callable) => write!(f, "<{}>", callable.name().unwrap_or("custom")),
            Guard::Group(guards) => {
                f.write_str("[")?;
                for (i, guard) in guards.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", guard)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_parsing() {
        assert_eq!(Guard::from("null"), Guard::Name("null".into()));
        assert_eq!(Guard::from("!null"), Guard::Negated("null".into()));
        // only the first marker negates
        assert_eq!(Guard::from("!!null"), Guard::Negated("!null".into()));
    }

    #[test]
    fn classify_dispatches_on_shape() {
        let f = Callable::new(|_| true);
        let raw = Value::Array(vec![
            Value::from("!string"),
            Value::Array(vec![Value::from("number")]),
            Value::Function(f.clone()),
        ]);
        let guard = Guard::classify(&raw).unwrap();
        assert_eq!(
            guard,
            Guard::Group(vec![
                Guard::Negated("string".into()),
                Guard::Group(vec![Guard::Name("number".into())]),
                Guard::Custom(f),
            ])
        );
    }

    #[test]
    fn classify_rejects_other_values() {
        for raw in [Value::Null, Value::from(1), Value::object([("a", 1)])] {
            let err = Guard::classify(&raw).unwrap_err();
            assert_eq!(
                err,
                GuardError::InvalidGuard {
                    rendered: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn invalid_guard_inside_group_is_reported() {
        let raw = Value::Array(vec![Value::from("string"), Value::from(true)]);
        let err = Guard::try_from(raw).unwrap_err();
        assert_eq!(err.to_string(), "Invalid guard: true");
    }

    #[test]
    fn display_round_trips_tokens() {
        let guard = Guard::group([
            Guard::from("string"),
            Guard::from("!null"),
            Guard::Custom(Callable::named("positive", |_| true)),
        ]);
        assert_eq!(guard.to_string(), "[string, !null, <positive>]");
    }
}
