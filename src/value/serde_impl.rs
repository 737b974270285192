//! Serde support for values.
//!
//! Conversion from `serde_json::Value` produces plain objects, and
//! serialization follows `JSON.stringify`: values with no JSON form become
//! `null` in arrays and are dropped from objects.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Object, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(map.into_iter().collect::<Object>()),
        }
    }
}

/// 2^53: integral numbers below this are written without a fraction.
const SAFE_INTEGER_BOUND: f64 = 9_007_199_254_740_992.0;

fn has_json_form(value: &Value) -> bool {
    !matches!(
        value,
        Value::Undefined | Value::Function(_) | Value::Symbol(_)
    )
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Function(_) | Value::Symbol(_) => {
                serializer.serialize_unit()
            }
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < SAFE_INTEGER_BOUND => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Number(_) => serializer.serialize_unit(),
            Value::BigInt(n) => serializer.serialize_str(&n.to_string()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let kept: Vec<_> = obj
                    .entries()
                    .iter()
                    .filter(|(_, v)| has_json_form(v))
                    .collect();
                let mut map = serializer.serialize_map(Some(kept.len()))?;
                for (key, value) in kept {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
