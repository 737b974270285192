//! # type-guards
//!
//! Composable runtime type guards over dynamic values.
//!
//! A guard list reads as a boolean expression of named type checks and custom
//! predicates: the list itself is an AND, a nested list flips to OR, a nested
//! list inside that flips back to AND. Tokens prefixed with `!` are negated.
//!
//! ## Quick Example
//!
//! ```rust
//! use type_guards::{asserts, create_filter, is, Guard, Value};
//!
//! // string or plain object, and not null
//! let guards = [Guard::group(["string", "plainObject"]), Guard::from("!null")];
//!
//! assert_eq!(is(&Value::from("hello"), &guards), Ok(true));
//! assert_eq!(is(&Value::array([1, 2]), &guards), Ok(false));
//!
//! assert!(asserts(&Value::from(5), &[Guard::group(["string", "number"])]).is_ok());
//! assert!(asserts(&Value::Null, &[Guard::from("string")]).is_err());
//!
//! let positive = create_filter([
//!     Guard::from("number"),
//!     Guard::custom(|v| v.as_f64().is_some_and(|n| n > 0.0)),
//! ])
//! .unwrap();
//! assert!(positive.matches(&Value::from(3)));
//! ```
//!
//! ## Tables
//!
//! Tokens resolve against a [`PredicateTable`]. The free functions use the
//! extended table; [`primitive`] exposes the same entry points over the eight
//! `typeof` categories, and [`GuardEngine`] binds them to any table.
//!
//! ## Features
//!
//! - `tracing`: evaluator and assertion events through `tracing`
//! - `serde`: conversion from `serde_json::Value` and `Serialize` for [`Value`]
//! - `proptest`: value strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod guard;
pub mod objects;
pub mod predicate;
pub mod testing;
pub mod value;

// Re-exports
pub use error::{EntryFailures, GuardError};
pub use guard::{
    asserts, create_filter, is, primitive, Guard, GuardEngine, GuardFilter, Plan, Traversal,
};
pub use predicate::{Predicate, PredicateExt, PredicateTable};
pub use value::{Callable, Object, Prototype, Symbol, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::GuardError;
    pub use crate::guard::{asserts, create_filter, is, primitive, Guard, GuardEngine, GuardFilter};
    pub use crate::predicate::{Predicate, PredicateExt, PredicateTable};
    pub use crate::value::{Callable, Object, Prototype, Value};
}
