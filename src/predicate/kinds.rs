//! Runtime type-category predicates
//!
//! One function per table token. The primitive table uses
//! [`is_typeof_object`] for `object`, the extended table uses [`is_object`].

use crate::value::Value;

/// `typeof value === "string"`
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// `typeof value === "number"`, including NaN.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// `typeof value === "boolean"`
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// `typeof value === "function"`
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// `typeof value === "object"`: null, arrays and objects.
pub fn is_typeof_object(value: &Value) -> bool {
    matches!(value, Value::Null | Value::Array(_) | Value::Object(_))
}

/// `typeof value === "symbol"`
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// `typeof value === "bigint"`
pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

/// `typeof value === "undefined"`
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// A non-null, non-array object of any prototype.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// An object whose prototype is the object literal prototype or none.
pub fn is_plain_object(value: &Value) -> bool {
    value.as_object().is_some_and(|obj| obj.is_plain())
}

/// An array.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Exactly null.
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Null or undefined.
pub fn is_nullish(value: &Value) -> bool {
    value.is_nullish()
}
