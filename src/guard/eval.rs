//! AND/OR evaluation of compiled guard lists
//!
//! [`evaluate_all`] and [`evaluate_any`] are mutually recursive: a group met
//! in an AND frame is evaluated with OR, and the reverse. Both record the
//! tested value in a [`Traversal`] on entry. A group whose value is already
//! in flight under the opposite combinator is not entered again and counts as
//! satisfied.
//!
//! Within a frame, token checks run first, then custom predicates, then
//! groups, each short-circuiting.
//!
//! # Example
//!
//! ```rust
//! use type_guards::guard::{evaluate_all, evaluate_any};
//! use type_guards::{Guard, Plan, PredicateTable, Traversal, Value};
//!
//! let plan = Plan::compile(PredicateTable::extended(), &[Guard::from("string"), Guard::from("null")])
//!     .unwrap();
//! let value = Value::Null;
//!
//! assert!(!evaluate_all(&value, &plan, &mut Traversal::new()));
//! assert!(evaluate_any(&value, &plan, &mut Traversal::new()));
//! ```

use std::collections::HashSet;

use super::plan::Plan;
use crate::value::Value;

/// Identity of a value during one evaluation: the address it is borrowed at.
///
/// The same borrowed value is threaded through every frame of a call, so
/// its identity is stable for that call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueId(usize);

impl ValueId {
    /// Identity of `value`.
    pub fn of(value: &Value) -> Self {
        ValueId(value as *const Value as usize)
    }
}

/// Values currently being evaluated under each combinator.
///
/// Entry points create an empty traversal per call; compose calls by hand to
/// share one.
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    and: HashSet<ValueId>,
    or: HashSet<ValueId>,
}

impl Traversal {
    /// Both sets empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `value` has entered an AND frame.
    pub fn in_and(&self, value: &Value) -> bool {
        self.and.contains(&ValueId::of(value))
    }

    /// `true` if `value` has entered an OR frame.
    pub fn in_or(&self, value: &Value) -> bool {
        self.or.contains(&ValueId::of(value))
    }

    /// Mark `value` as in flight under AND.
    pub fn enter_and(&mut self, value: &Value) {
        self.and.insert(ValueId::of(value));
    }

    /// Mark `value` as in flight under OR.
    pub fn enter_or(&mut self, value: &Value) {
        self.or.insert(ValueId::of(value));
    }
}

/// AND semantics: every token, every custom predicate and every group holds.
///
/// An empty plan is vacuously true.
pub fn evaluate_all(value: &Value, plan: &Plan, traversal: &mut Traversal) -> bool {
    traversal.enter_and(value);

    let result = plan.names().iter().all(|name| name.check(value))
        && plan.customs().iter().all(|custom| custom.call(value))
        && plan.groups().iter().all(|group| {
            if traversal.in_or(value) {
                return true;
            }
            evaluate_any(value, group, traversal)
        });

    #[cfg(feature = "tracing")]
    tracing::trace!(
        combinator = "and",
        names = plan.names().len(),
        customs = plan.customs().len(),
        groups = plan.groups().len(),
        result,
        "evaluated guard frame"
    );

    result
}

/// OR semantics: some token, some custom predicate or some group holds.
///
/// An empty plan is false.
pub fn evaluate_any(value: &Value, plan: &Plan, traversal: &mut Traversal) -> bool {
    traversal.enter_or(value);

    let result = plan.names().iter().any(|name| name.check(value))
        || plan.customs().iter().any(|custom| custom.call(value))
        || plan.groups().iter().any(|group| {
            if traversal.in_and(value) {
                return true;
            }
            evaluate_all(value, group, traversal)
        });

    #[cfg(feature = "tracing")]
    tracing::trace!(
        combinator = "or",
        names = plan.names().len(),
        customs = plan.customs().len(),
        groups = plan.groups().len(),
        result,
        "evaluated guard frame"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::Guard;
    use crate::predicate::PredicateTable;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn plan(guards: &[Guard]) -> Plan {
        Plan::compile(PredicateTable::extended(), guards).unwrap()
    }

    #[test]
    fn empty_plan_identities() {
        let empty = plan(&[]);
        let value = Value::from(1);
        assert!(evaluate_all(&value, &empty, &mut Traversal::new()));
        assert!(!evaluate_any(&value, &empty, &mut Traversal::new()));
    }

    #[test]
    fn group_in_and_frame_is_or() {
        let p = plan(&[Guard::group(["string", "number"])]);
        assert!(evaluate_all(&Value::from(5), &p, &mut Traversal::new()));
        assert!(evaluate_all(&Value::from("5"), &p, &mut Traversal::new()));
        assert!(!evaluate_all(&Value::Null, &p, &mut Traversal::new()));
    }

    #[test]
    fn empty_group_in_and_frame_fails() {
        let p = plan(&[Guard::Group(Vec::new())]);
        assert!(!evaluate_all(&Value::from(1), &p, &mut Traversal::new()));
    }

    #[test]
    fn group_in_or_frame_is_and() {
        let p = plan(&[Guard::from("null"), Guard::group(["string", "!nullish"])]);
        assert!(evaluate_any(&Value::Null, &p, &mut Traversal::new()));
        assert!(evaluate_any(&Value::from("a"), &p, &mut Traversal::new()));
        assert!(!evaluate_any(&Value::from(2), &p, &mut Traversal::new()));
    }

    #[test]
    fn second_level_group_is_vacuously_true() {
        // and -> or -> (group skipped: value already in the and set)
        let p = plan(&[Guard::group([Guard::group(["number"])])]);
        assert!(evaluate_all(&Value::from("x"), &p, &mut Traversal::new()));
    }

    #[test]
    fn traversal_records_value_identity() {
        let value = Value::from(3);
        let other = Value::from(3);
        let mut traversal = Traversal::new();
        evaluate_all(&value, &plan(&[Guard::group(["number"])]), &mut traversal);
        assert!(traversal.in_and(&value));
        assert!(traversal.in_or(&value));
        assert!(!traversal.in_and(&other));
    }

    #[test]
    fn prepopulated_opposite_set_skips_groups() {
        let value = Value::from(true);
        let mut traversal = Traversal::new();
        traversal.enter_or(&value);
        // the group alone would be false for a boolean
        let p = plan(&[Guard::group(["string"])]);
        assert!(evaluate_all(&value, &p, &mut traversal));
    }

    #[test]
    fn custom_called_once_with_the_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let p = plan(&[
            Guard::from("number"),
            Guard::custom(move |v| {
                seen.fetch_add(1, Ordering::SeqCst);
                v.as_f64() == Some(2.0)
            }),
            Guard::group(["number", "string"]),
        ]);
        assert!(evaluate_all(&Value::from(2), &p, &mut Traversal::new()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn short_circuits_after_failed_token() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let p = plan(&[
            Guard::from("string"),
            Guard::custom(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
                true
            }),
        ]);
        assert!(!evaluate_all(&Value::from(1), &p, &mut Traversal::new()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
