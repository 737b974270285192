//! Dynamic values tested by guards
//!
//! Guards answer questions such as "is this a string or a plain object, and
//! not null" about a value whose type is only known at runtime. [`Value`]
//! models the categories those questions distinguish: the primitive kinds,
//! callables, arrays and objects with their prototype.
//!
//! # Example
//!
//! ```rust
//! use type_guards::{Object, Prototype, Value};
//!
//! let point = Value::object([("x", 1), ("y", 2)]);
//! assert_eq!(point.type_name(), "object");
//! assert!(point.as_object().unwrap().is_plain());
//!
//! let date = Value::Object(Object::with_prototype(Prototype::Class("Date".into())));
//! assert!(!date.as_object().unwrap().is_plain());
//! ```

mod display;
#[cfg(feature = "serde")]
mod serde_impl;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::predicate::{Predicate, SharedPredicate};

/// A dynamically-typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An arbitrary-precision integer, bounded here to 128 bits.
    BigInt(i128),
    /// A string.
    String(String),
    /// A unique symbol.
    Symbol(Symbol),
    /// A callable unary predicate.
    Function(Callable),
    /// An ordered list of values.
    Array(Vec<Value>),
    /// A keyed object.
    Object(Object),
}

impl Value {
    /// Build a bigint value.
    pub fn bigint(n: i128) -> Self {
        Value::BigInt(n)
    }

    /// Build a fresh symbol with an optional description.
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(Symbol::new(description))
    }

    /// Wrap a closure as a callable value.
    ///
    /// Callables double as custom guards when classified with
    /// [`Guard::classify`](crate::Guard::classify).
    ///
    /// ```rust
    /// use type_guards::Value;
    ///
    /// let positive = Value::function(|v| v.as_f64().is_some_and(|n| n > 0.0));
    /// assert_eq!(positive.type_name(), "function");
    /// ```
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Value::Function(Callable::new(f))
    }

    /// Build an array value.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build a plain object from `(key, value)` pairs, preserving their order.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(entries.into_iter().collect())
    }

    /// The `typeof` category of this value.
    ///
    /// Null reports `"object"`, as does every array.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Array(_) | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
        }
    }

    /// `true` for `Null` and `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Borrow the string contents.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric value of a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value of a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the elements of an `Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow an `Object`.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Borrow a `Function`.
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(callable) => Some(callable),
            _ => None,
        }
    }
}

static NEXT_SYMBOL: AtomicU64 = AtomicU64::new(0);

/// A symbol: unique by construction, equal only to its own clones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a new, distinct symbol.
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed),
            description: description.map(Arc::from),
        }
    }

    /// The description given at construction.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A shared callable predicate over values.
///
/// Two callables are equal only when they share the same underlying function.
#[derive(Clone)]
pub struct Callable {
    name: Option<Arc<str>>,
    predicate: SharedPredicate,
}

impl Callable {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::from_predicate(f)
    }

    /// Wrap a closure under a name, used when rendering the callable.
    pub fn named<F>(name: &str, f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: Some(Arc::from(name)),
            predicate: Arc::new(f),
        }
    }

    /// Wrap any value predicate, e.g. a combinator chain or a guard filter.
    pub fn from_predicate<P>(predicate: P) -> Self
    where
        P: Predicate<Value> + 'static,
    {
        Self {
            name: None,
            predicate: Arc::new(predicate),
        }
    }

    /// Name given at construction, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the callable with exactly one argument.
    pub fn call(&self, value: &Value) -> bool {
        self.predicate.check(value)
    }
}

impl Predicate<Value> for Callable {
    fn check(&self, value: &Value) -> bool {
        self.call(value)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callable")
            .field(&self.name().unwrap_or("<anonymous>"))
            .finish()
    }
}

/// The prototype an object was created with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Prototype {
    /// An object literal.
    #[default]
    Object,
    /// An object created without a prototype.
    Null,
    /// An instance of a named class.
    Class(String),
}

/// A keyed object with insertion-ordered entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    prototype: Prototype,
    entries: IndexMap<String, Value>,
}

impl Object {
    /// An empty object literal.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty object with the given prototype.
    pub fn with_prototype(prototype: Prototype) -> Self {
        Self {
            prototype,
            entries: IndexMap::new(),
        }
    }

    /// Insert an entry, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up an entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The object's prototype.
    pub fn prototype(&self) -> &Prototype {
        &self.prototype
    }

    /// `true` when the prototype is the object literal prototype or none.
    pub fn is_plain(&self) -> bool {
        matches!(self.prototype, Prototype::Object | Prototype::Null)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &IndexMap<String, Value> {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            prototype: Prototype::Object,
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Value::Function(callable)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
