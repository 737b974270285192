//! Testing utilities for guard-based code
//!
//! Assertion macros that report the rendered value on failure, and, behind
//! the `proptest` feature, strategies that generate arbitrary [`Value`]s.
//!
//! # Examples
//!
//! ```rust
//! use type_guards::{assert_guard, assert_not_guard, Guard, Value};
//!
//! assert_guard!(Value::from("a"), "string", "!nullish");
//! assert_not_guard!(Value::Null, Guard::group(["string", "number"]));
//! ```

#[cfg(feature = "proptest")]
use crate::value::{Callable, Object, Prototype, Symbol};
#[cfg(feature = "proptest")]
use crate::Value;

/// Assert that a value satisfies every guard, using the extended table.
///
/// Panics when the value is rejected or when the guard list is malformed.
///
/// # Example
///
/// ```rust
/// use type_guards::{assert_guard, Value};
///
/// assert_guard!(Value::array([1, 2]), "array", "!plainObject");
/// ```
#[macro_export]
macro_rules! assert_guard {
    ($value:expr, $($guard:expr),+ $(,)?) => {{
        let value: &$crate::Value = &$value;
        let guards = [$($crate::Guard::from($guard)),+];
        match $crate::is(value, &guards) {
            Ok(true) => {}
            Ok(false) => panic!("Expected `{}` to satisfy the guards, but it was rejected", value),
            Err(e) => panic!("Malformed guard list: {}", e),
        }
    }};
}

/// Assert that a value does not satisfy the guards, using the extended table.
///
/// Panics when the value is accepted or when the guard list is malformed.
///
/// # Example
///
/// ```rust
/// use type_guards::{assert_not_guard, Value};
///
/// assert_not_guard!(Value::Null, "object");
/// ```
#[macro_export]
macro_rules! assert_not_guard {
    ($value:expr, $($guard:expr),+ $(,)?) => {{
        let value: &$crate::Value = &$value;
        let guards = [$($crate::Guard::from($guard)),+];
        match $crate::is(value, &guards) {
            Ok(false) => {}
            Ok(true) => panic!("Expected `{}` to be rejected, but it satisfied the guards", value),
            Err(e) => panic!("Malformed guard list: {}", e),
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy for scalar values: every kind except arrays and objects.
#[cfg(feature = "proptest")]
pub fn arb_scalar() -> BoxedStrategy<Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        any::<i64>().prop_map(|n| Value::BigInt(i128::from(n))),
        "[a-z]{0,8}".prop_map(Value::String),
        proptest::option::of("[a-z]{1,4}")
            .prop_map(|desc| Value::Symbol(Symbol::new(desc.as_deref()))),
        any::<bool>().prop_map(|answer| Value::Function(Callable::new(move |_| answer))),
    ]
    .boxed()
}

/// Strategy for arbitrary values, nesting arrays and objects a few levels deep.
#[cfg(feature = "proptest")]
pub fn arb_value() -> BoxedStrategy<Value> {
    arb_scalar()
        .prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                (
                    arb_prototype(),
                    proptest::collection::vec(("[a-z]{1,3}", inner), 0..4)
                )
                    .prop_map(|(prototype, entries)| {
                        let mut obj = Object::with_prototype(prototype);
                        for (key, value) in entries {
                            obj.insert(key, value);
                        }
                        Value::Object(obj)
                    }),
            ]
        })
        .boxed()
}

#[cfg(feature = "proptest")]
fn arb_prototype() -> impl Strategy<Value = Prototype> {
    prop_oneof![
        Just(Prototype::Object),
        Just(Prototype::Null),
        "[A-Z][a-z]{2,6}".prop_map(Prototype::Class),
    ]
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        arb_value()
    }
}
