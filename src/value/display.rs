//! String conversion of values, as used in assertion messages.

use std::fmt;

use super::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Symbol(symbol) => {
                write!(f, "Symbol({})", symbol.description().unwrap_or_default())
            }
            Value::Function(callable) => write!(
                f,
                "function {}() {{ [native code] }}",
                callable.name().unwrap_or_default()
            ),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // holes and nullish elements join as empty strings
                    if !item.is_nullish() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form outside the fixed-notation range, always signed
        let text = format!("{:e}", n);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exp)
            }
            _ => f.write_str(&text),
        }
    } else {
        write!(f, "{}", n)
    }
}
