//! Public entry points: `is`, `asserts` and `create_filter`
//!
//! The free functions use the extended table; the [`primitive`] module holds
//! the same three functions over the primitive table. A [`GuardEngine`] binds
//! the functions to any table.

use std::fmt;
use std::sync::Arc;

use super::eval::{evaluate_all, Traversal};
use super::plan::Plan;
use super::Guard;
use crate::error::GuardError;
use crate::predicate::{Predicate, PredicateTable};
use crate::value::Value;

/// The entry points bound to one predicate table.
///
/// # Example
///
/// ```rust
/// use type_guards::{Guard, GuardEngine, PredicateTable, Value};
///
/// let table = PredicateTable::builder("scalars")
///     .extend(PredicateTable::primitive())
///     .with("finite", |v: &Value| v.as_f64().is_some_and(f64::is_finite))
///     .build();
/// let engine = GuardEngine::new(&table);
///
/// assert_eq!(engine.is(&Value::from(1.5), &[Guard::from("finite")]), Ok(true));
/// assert_eq!(engine.is(&Value::from(f64::NAN), &[Guard::from("finite")]), Ok(false));
/// assert!(engine.asserts(&Value::from("x"), &[Guard::from("!finite")]).is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GuardEngine<'t> {
    table: &'t PredicateTable,
}

impl GuardEngine<'static> {
    /// Engine over the extended table.
    pub fn extended() -> Self {
        Self::new(PredicateTable::extended())
    }

    /// Engine over the primitive table.
    pub fn primitive() -> Self {
        Self::new(PredicateTable::primitive())
    }
}

impl<'t> GuardEngine<'t> {
    /// Engine over `table`.
    pub fn new(table: &'t PredicateTable) -> Self {
        Self { table }
    }

    /// The table tokens are resolved against.
    pub fn table(&self) -> &'t PredicateTable {
        self.table
    }

    /// Test `value` against the AND of `guards`.
    ///
    /// `Err` only reports a malformed guard list; a value that fails the
    /// guards is `Ok(false)`.
    pub fn is(&self, value: &Value, guards: &[Guard]) -> Result<bool, GuardError> {
        let plan = Plan::compile(self.table, guards)?;
        Ok(evaluate_all(value, &plan, &mut Traversal::new()))
    }

    /// Like [`is`](Self::is), but a rejected value is an error.
    pub fn asserts(&self, value: &Value, guards: &[Guard]) -> Result<(), GuardError> {
        if self.is(value, guards)? {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(table = self.table.name(), value = %value, "guard assertion failed");

        Err(GuardError::Assertion {
            rendered: value.to_string(),
        })
    }

    /// Compile `guards` once into a reusable filter.
    pub fn create_filter<I>(&self, guards: I) -> Result<GuardFilter, GuardError>
    where
        I: IntoIterator,
        I::Item: Into<Guard>,
    {
        let guards: Vec<Guard> = guards.into_iter().map(Into::into).collect();
        let plan = Plan::compile(self.table, &guards)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            table = self.table.name(),
            guards = guards.len(),
            "compiled guard filter"
        );

        Ok(GuardFilter {
            inner: Arc::new(FilterInner { guards, plan }),
        })
    }
}

struct FilterInner {
    guards: Vec<Guard>,
    plan: Plan,
}

/// A compiled guard list, reusable across any number of values.
///
/// Cloning shares the compiled plan. Each call starts from a fresh
/// [`Traversal`], so calls never influence each other.
///
/// # Example
///
/// ```rust
/// use type_guards::{create_filter, Guard, Value};
///
/// let positive = create_filter([
///     Guard::from("number"),
///     Guard::custom(|v| v.as_f64().is_some_and(|n| n > 0.0)),
/// ])
/// .unwrap();
///
/// let values: Vec<Value> = [-1, 0, 1, 2].into_iter().map(Value::from).collect();
/// let selected = positive.select(&values);
/// assert_eq!(selected, [&Value::from(1), &Value::from(2)]);
/// ```
#[derive(Clone)]
pub struct GuardFilter {
    inner: Arc<FilterInner>,
}

impl GuardFilter {
    /// Test one value.
    pub fn matches(&self, value: &Value) -> bool {
        evaluate_all(value, &self.inner.plan, &mut Traversal::new())
    }

    /// Keep the values that match, in their original order.
    pub fn select<'v, I>(&self, values: I) -> Vec<&'v Value>
    where
        I: IntoIterator<Item = &'v Value>,
    {
        values.into_iter().filter(|v| self.matches(v)).collect()
    }

    /// The guards the filter was built from.
    pub fn guards(&self) -> &[Guard] {
        &self.inner.guards
    }

    /// The compiled plan.
    pub fn plan(&self) -> &Plan {
        &self.inner.plan
    }
}

impl Predicate<Value> for GuardFilter {
    fn check(&self, value: &Value) -> bool {
        self.matches(value)
    }
}

impl fmt::Debug for GuardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardFilter")
            .field("guards", &self.inner.guards)
            .finish()
    }
}

/// Test `value` against `guards` using the extended table.
///
/// ```rust
/// use type_guards::{is, Guard, Value};
///
/// assert_eq!(is(&Value::array([1]), &[Guard::from("array")]), Ok(true));
/// assert_eq!(is(&Value::array([1]), &[Guard::from("object")]), Ok(false));
/// assert_eq!(is(&Value::Null, &[]), Ok(true));
/// ```
pub fn is(value: &Value, guards: &[Guard]) -> Result<bool, GuardError> {
    GuardEngine::extended().is(value, guards)
}

/// Fail with [`GuardError::Assertion`] unless `value` satisfies `guards`,
/// using the extended table.
///
/// ```rust
/// use type_guards::{asserts, Guard, Value};
///
/// assert!(asserts(&Value::from("s"), &[Guard::from("string")]).is_ok());
///
/// let err = asserts(&Value::Null, &[Guard::from("string")]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Invalid value: null does not match any of the asserted types."
/// );
/// ```
pub fn asserts(value: &Value, guards: &[Guard]) -> Result<(), GuardError> {
    GuardEngine::extended().asserts(value, guards)
}

/// Build a reusable filter over the extended table.
pub fn create_filter<I>(guards: I) -> Result<GuardFilter, GuardError>
where
    I: IntoIterator,
    I::Item: Into<Guard>,
{
    GuardEngine::extended().create_filter(guards)
}

/// Entry points over the primitive table.
///
/// Only the eight `typeof` tokens are known here, and `object` is true for
/// null and arrays.
///
/// ```rust
/// use type_guards::{primitive, Guard, Value};
///
/// let list = Value::array(Vec::<Value>::new());
/// assert_eq!(primitive::is(&list, &[Guard::from("object")]), Ok(true));
/// assert!(primitive::is(&list, &[Guard::from("array")]).is_err());
/// ```
pub mod primitive {
    use super::{GuardEngine, GuardFilter};
    use crate::error::GuardError;
    use crate::guard::Guard;
    use crate::value::Value;

    /// Test `value` against `guards` using the primitive table.
    pub fn is(value: &Value, guards: &[Guard]) -> Result<bool, GuardError> {
        GuardEngine::primitive().is(value, guards)
    }

    /// Fail with [`GuardError::Assertion`] unless `value` satisfies `guards`,
    /// using the primitive table.
    pub fn asserts(value: &Value, guards: &[Guard]) -> Result<(), GuardError> {
        GuardEngine::primitive().asserts(value, guards)
    }

    /// Build a reusable filter over the primitive table.
    pub fn create_filter<I>(guards: I) -> Result<GuardFilter, GuardError>
    where
        I: IntoIterator,
        I::Item: Into<Guard>,
    {
        GuardEngine::primitive().create_filter(guards)
    }
}
