//! Error types for guard evaluation and the object helpers.

use std::fmt;

/// Error raised by the guard engine.
///
/// Every variant is a caller contract violation (a malformed guard list) or an
/// intentional assertion failure. A value that simply does not satisfy a guard
/// is not an error: [`is`](crate::is) reports that as `Ok(false)`.
///
/// # Examples
///
/// ```rust
/// use type_guards::{is, Guard, GuardError, Value};
///
/// let err = is(&Value::Null, &[Guard::from("date")]).unwrap_err();
/// assert!(err.is_unknown_token());
/// assert_eq!(
///     err,
///     GuardError::UnknownTypeToken {
///         token: "date".to_string(),
///         table: "extended".to_string(),
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// A raw guard was neither a token, a callable nor a nested list.
    InvalidGuard {
        /// Rendering of the offending guard value.
        rendered: String,
    },
    /// A token is not a key of the active predicate table.
    UnknownTypeToken {
        /// The token without its negation marker.
        token: String,
        /// Name of the table the lookup ran against.
        table: String,
    },
    /// `asserts` rejected the value.
    Assertion {
        /// Rendering of the rejected value.
        rendered: String,
    },
}

impl GuardError {
    /// Returns `true` for [`GuardError::InvalidGuard`].
    pub fn is_invalid_guard(&self) -> bool {
        matches!(self, GuardError::InvalidGuard { .. })
    }

    /// Returns `true` for [`GuardError::UnknownTypeToken`].
    pub fn is_unknown_token(&self) -> bool {
        matches!(self, GuardError::UnknownTypeToken { .. })
    }

    /// Returns `true` for [`GuardError::Assertion`].
    pub fn is_assertion(&self) -> bool {
        matches!(self, GuardError::Assertion { .. })
    }
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardError::InvalidGuard { rendered } => write!(f, "Invalid guard: {}", rendered),
            GuardError::UnknownTypeToken { token, table } => {
                write!(f, "unknown type token `{}` for the {} table", token, table)
            }
            GuardError::Assertion { rendered } => write!(
                f,
                "Invalid value: {} does not match any of the asserted types.",
                rendered
            ),
        }
    }
}

impl std::error::Error for GuardError {}

/// Aggregate failure of a concurrent per-entry object operation.
///
/// Holds every failed key with its error, in the key order of the input map.
/// Never empty.
///
/// # Examples
///
/// ```rust
/// use type_guards::EntryFailures;
///
/// let failures = EntryFailures::new(vec![("b".to_string(), "boom")]).unwrap();
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures.to_string(), "1 entry failed: b: boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFailures<E> {
    failures: Vec<(String, E)>,
}

impl<E> EntryFailures<E> {
    /// Build from a list of `(key, error)` pairs; `None` when the list is empty.
    pub fn new(failures: Vec<(String, E)>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self { failures })
        }
    }

    /// Failed entries in input order.
    pub fn failures(&self) -> &[(String, E)] {
        &self.failures
    }

    /// Number of failed entries.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Keys of the failed entries.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|(key, _)| key.as_str())
    }

    /// Consume and return the `(key, error)` pairs.
    pub fn into_failures(self) -> Vec<(String, E)> {
        self.failures
    }
}

impl<E: fmt::Display> fmt::Display for EntryFailures<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.failures.len() == 1 {
            "entry"
        } else {
            "entries"
        };
        write!(f, "{} {} failed:", self.failures.len(), noun)?;
        for (i, (key, err)) in self.failures.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, " {}: {}", key, err)?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for EntryFailures<E> {}
