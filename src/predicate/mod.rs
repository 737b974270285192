//! Predicates over dynamic values
//!
//! This module holds the building blocks guards are made of:
//!
//! - [`Predicate`] and the [`PredicateExt`] combinators (`and`, `or`, `not`)
//! - [`kinds`], one predicate per runtime type category
//! - [`PredicateTable`], the immutable token → predicate mapping a guard
//!   engine resolves names against
//!
//! # Example
//!
//! ```rust
//! use type_guards::predicate::*;
//! use type_guards::Value;
//!
//! let table = PredicateTable::extended();
//! let is_list = table.lookup("array").unwrap();
//! assert!(is_list.check(&Value::array(["a"])));
//!
//! let text_or_list = kinds::is_string.or(kinds::is_array);
//! assert!(text_or_list.check(&Value::from("a")));
//! ```

mod combinators;
pub mod kinds;
mod table;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};
pub use table::{
    is_primitive_type_name, is_type_name, PredicateTable, SharedPredicate, TableBuilder,
    EXTENDED_TYPE_NAMES, PRIMITIVE_TYPE_NAMES,
};
