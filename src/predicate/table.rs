//! Predicate tables: type-name tokens mapped to value predicates
//!
//! Two tables ship with the crate. The *primitive* table knows the eight
//! `typeof` categories; the *extended* table adds `array`, `null`,
//! `plainObject` and `nullish`, and narrows `object` to exclude null and
//! arrays. Both are built once per process and never mutated.
//!
//! Alternate tables can be built with [`PredicateTable::builder`] and handed to
//! a [`GuardEngine`](crate::GuardEngine).
//!
//! # Example
//!
//! ```rust
//! use type_guards::{PredicateTable, Value};
//!
//! let primitive = PredicateTable::primitive();
//! let extended = PredicateTable::extended();
//! let list = Value::array([1, 2]);
//!
//! assert_eq!(primitive.check("object", &list), Ok(true));
//! assert_eq!(extended.check("object", &list), Ok(false));
//! assert!(primitive.lookup("array").is_err());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;

use super::combinators::Predicate;
use super::kinds;
use crate::error::GuardError;
use crate::value::Value;

/// A predicate shared between tables, guards and callables.
pub type SharedPredicate = Arc<dyn Predicate<Value>>;

/// Token names of the primitive table, in table order.
pub const PRIMITIVE_TYPE_NAMES: [&str; 8] = [
    "string",
    "number",
    "boolean",
    "function",
    "object",
    "symbol",
    "bigint",
    "undefined",
];

/// Primitive type names plus the refined `array` and `null` categories.
pub const EXTENDED_TYPE_NAMES: [&str; 10] = [
    "string",
    "number",
    "boolean",
    "function",
    "object",
    "symbol",
    "bigint",
    "undefined",
    "array",
    "null",
];

/// `true` if `key` names one of the primitive type categories.
pub fn is_primitive_type_name(key: &str) -> bool {
    PRIMITIVE_TYPE_NAMES.contains(&key)
}

/// `true` if `key` names a primitive or extended type category.
pub fn is_type_name(key: &str) -> bool {
    EXTENDED_TYPE_NAMES.contains(&key)
}

static PRIMITIVE: LazyLock<PredicateTable> = LazyLock::new(|| {
    PredicateTable::builder("primitive")
        .with("string", kinds::is_string)
        .with("number", kinds::is_number)
        .with("boolean", kinds::is_boolean)
        .with("function", kinds::is_function)
        .with("object", kinds::is_typeof_object)
        .with("symbol", kinds::is_symbol)
        .with("bigint", kinds::is_bigint)
        .with("undefined", kinds::is_undefined)
        .build()
});

static EXTENDED: LazyLock<PredicateTable> = LazyLock::new(|| {
    PredicateTable::builder("extended")
        .extend(&PRIMITIVE)
        .with("object", kinds::is_object)
        .with("plainObject", kinds::is_plain_object)
        .with("array", kinds::is_array)
        .with("null", kinds::is_null)
        .with("nullish", kinds::is_nullish)
        .build()
});

/// An immutable mapping from type tokens to predicates.
#[derive(Clone)]
pub struct PredicateTable {
    name: Cow<'static, str>,
    entries: IndexMap<Cow<'static, str>, SharedPredicate>,
}

impl PredicateTable {
    /// Start building a table with the given name.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> TableBuilder {
        TableBuilder {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    /// The table of the eight `typeof` categories.
    pub fn primitive() -> &'static PredicateTable {
        &PRIMITIVE
    }

    /// The primitive table refined with array, null and plain-object tokens.
    pub fn extended() -> &'static PredicateTable {
        &EXTENDED
    }

    /// Name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve a token, failing fast when the table does not know it.
    pub fn lookup(&self, token: &str) -> Result<&SharedPredicate, GuardError> {
        self.entries
            .get(token)
            .ok_or_else(|| GuardError::UnknownTypeToken {
                token: token.to_string(),
                table: self.name.to_string(),
            })
    }

    /// Resolve a token and apply it to `value`.
    pub fn check(&self, token: &str, value: &Value) -> Result<bool, GuardError> {
        self.lookup(token).map(|predicate| predicate.check(value))
    }

    /// `true` if the table has an entry for `token`.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Known tokens in table order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_ref())
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` for a table with no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PredicateTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateTable")
            .field("name", &self.name)
            .field("tokens", &self.tokens().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`PredicateTable`].
///
/// ```rust
/// use type_guards::predicate::kinds;
/// use type_guards::{PredicateTable, Value};
///
/// let table = PredicateTable::builder("numeric")
///     .with("number", kinds::is_number)
///     .with("integer", |v: &Value| v.as_f64().is_some_and(|n| n.fract() == 0.0))
///     .build();
///
/// assert_eq!(table.check("integer", &Value::from(4)), Ok(true));
/// assert_eq!(table.check("integer", &Value::from(4.5)), Ok(false));
/// ```
pub struct TableBuilder {
    name: Cow<'static, str>,
    entries: IndexMap<Cow<'static, str>, SharedPredicate>,
}

impl TableBuilder {
    /// Add an entry, replacing an existing one with the same token in place.
    pub fn with<P>(self, token: impl Into<Cow<'static, str>>, predicate: P) -> Self
    where
        P: Predicate<Value> + 'static,
    {
        self.with_shared(token, Arc::new(predicate))
    }

    /// Add an already-shared predicate, e.g. one looked up in another table.
    pub fn with_shared(
        mut self,
        token: impl Into<Cow<'static, str>>,
        predicate: SharedPredicate,
    ) -> Self {
        self.entries.insert(token.into(), predicate);
        self
    }

    /// Copy every entry of `base`; later `with` calls override them.
    pub fn extend(mut self, base: &PredicateTable) -> Self {
        for (token, predicate) in &base.entries {
            self.entries.insert(token.clone(), Arc::clone(predicate));
        }
        self
    }

    /// Freeze the table.
    pub fn build(self) -> PredicateTable {
        PredicateTable {
            name: self.name,
            entries: self.entries,
        }
    }
}

impl fmt::Debug for TableBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableBuilder")
            .field("name", &self.name)
            .field("tokens", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
