//! End-to-end behaviour of the guard entry points.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use type_guards::prelude::*;
use type_guards::{assert_guard, assert_not_guard};

fn record(form: &str) -> Value {
    Value::object([("form", Value::from(form)), ("id", Value::from(7))])
}

#[test]
fn zero_guards_accept_any_value() {
    for value in [Value::Undefined, Value::Null, Value::from(false), record("a")] {
        assert_eq!(is(&value, &[]), Ok(true));
    }
}

#[test]
fn single_empty_group_rejects() {
    let guards = [Guard::Group(Vec::new())];
    assert_eq!(is(&Value::from(1), &guards), Ok(false));
    assert_eq!(is(&Value::Null, &guards), Ok(false));
}

#[test]
fn group_reads_as_or() {
    let guards = [Guard::group(["string", "number"])];
    assert_eq!(is(&Value::from(5), &guards), Ok(true));
    assert_eq!(is(&Value::from("5"), &guards), Ok(true));
    assert_eq!(is(&Value::from(true), &guards), Ok(false));
}

#[test]
fn second_level_group_is_vacuously_true() {
    // the value is already in the AND set when the inner group is reached
    let non_empty = Guard::custom(|v| v.as_str().is_some_and(|s| !s.is_empty()));
    let guards = [Guard::group([Guard::group([Guard::from("string"), non_empty])])];
    assert_eq!(is(&Value::from("x"), &guards), Ok(true));

    let never = Guard::custom(|_| false);
    let guards = [Guard::group([Guard::group([Guard::from("number"), never])])];
    assert_eq!(is(&Value::from("x"), &guards), Ok(true));
    assert_eq!(is(&Value::Null, &[Guard::group([Guard::group(["number"])])]), Ok(true));
}

#[test]
fn object_token_differs_between_tables() {
    let list = Value::array(Vec::<Value>::new());
    assert_eq!(primitive::is(&list, &[Guard::from("object")]), Ok(true));
    assert_eq!(is(&list, &[Guard::from("object")]), Ok(false));
    assert_eq!(is(&list, &[Guard::from("array")]), Ok(true));

    assert_eq!(primitive::is(&Value::Null, &[Guard::from("object")]), Ok(true));
    assert_eq!(is(&Value::Null, &[Guard::from("object")]), Ok(false));
}

#[test]
fn string_and_not_string_partition_values() {
    let values = [
        Value::from(""),
        Value::from(0),
        Value::Null,
        Value::Undefined,
        Value::bigint(1),
        record("x"),
    ];
    for value in &values {
        let yes = is(value, &[Guard::from("string")]).unwrap();
        let no = is(value, &[Guard::from("!string")]).unwrap();
        assert_ne!(yes, no, "{:?}", value);
    }
}

#[test]
fn mixed_expression() {
    // (string or plainObject) and not null
    let guards = [Guard::group(["string", "plainObject"]), Guard::from("!null")];
    assert_guard!(Value::from("a"), guards[0].clone(), guards[1].clone());
    assert_eq!(is(&record("a"), &guards), Ok(true));
    assert_eq!(is(&Value::Null, &guards), Ok(false));

    let instance = Value::Object(Object::with_prototype(Prototype::Class("Date".into())));
    assert_eq!(is(&instance, &guards), Ok(false));
    assert_not_guard!(instance, "plainObject");
}

#[test]
fn asserts_contract() {
    let err = asserts(&Value::Null, &[Guard::from("string")]).unwrap_err();
    assert_eq!(
        err,
        GuardError::Assertion {
            rendered: "null".to_string()
        }
    );
    assert!(asserts(&Value::from("s"), &[Guard::from("string")]).is_ok());

    let err = asserts(&Value::array([1, 2]), &[Guard::from("string")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value: 1,2 does not match any of the asserted types."
    );
}

#[test]
fn error_kinds_are_distinguishable() {
    let unknown = is(&Value::Null, &[Guard::from("nothing")]).unwrap_err();
    assert!(unknown.is_unknown_token());

    let invalid = Guard::classify(&Value::from(3)).unwrap_err();
    assert!(invalid.is_invalid_guard());

    let rejected = asserts(&Value::Null, &[Guard::from("number")]).unwrap_err();
    assert!(rejected.is_assertion());
}

#[test]
fn primitive_table_rejects_extended_tokens() {
    for token in ["array", "null", "plainObject", "nullish", "!array"] {
        let err = primitive::is(&Value::Null, &[Guard::from(token)]).unwrap_err();
        assert!(err.is_unknown_token(), "{}", token);
    }
}

#[test]
fn custom_receives_exactly_the_value_once() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
    let log = Arc::clone(&seen);
    let guards = [
        Guard::from("number"),
        Guard::custom(move |v| {
            log.lock().unwrap().push(v.clone());
            true
        }),
        Guard::group(["number", "string"]),
    ];

    assert_eq!(is(&Value::from(4), &guards), Ok(true));
    assert_eq!(*seen.lock().unwrap(), vec![Value::from(4)]);
}

#[test]
fn custom_inside_group_called_once_per_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let filter = create_filter([Guard::group([
        Guard::from("string"),
        Guard::custom(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        }),
    ])])
    .unwrap();

    assert!(!filter.matches(&Value::from(1)));
    assert!(!filter.matches(&Value::Null));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn filter_selects_in_order() {
    let filter = create_filter([
        Guard::from("number"),
        Guard::custom(|v| v.as_f64().is_some_and(|n| n > 0.0)),
    ])
    .unwrap();

    let values: Vec<Value> = [-1, 0, 1, 2].into_iter().map(Value::from).collect();
    assert_eq!(filter.select(&values), [&Value::from(1), &Value::from(2)]);
    // reusable
    assert_eq!(filter.select(values.iter().rev()), [&Value::from(2), &Value::from(1)]);
}

#[test]
fn primitive_filter() {
    let filter = primitive::create_filter(["object", "!undefined"]).unwrap();
    let values = vec![Value::Null, Value::array([1]), Value::from("x"), Value::Undefined];
    assert_eq!(filter.select(&values), [&Value::Null, &Value::array([1])]);
}

#[test]
fn filters_are_shareable_across_threads() {
    let filter = create_filter(["!nullish"]).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let filter = filter.clone();
            std::thread::spawn(move || filter.matches(&Value::from(i)))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn raw_guards_from_dynamic_values() {
    let raw = vec![
        Value::Array(vec![Value::from("string"), Value::from("number")]),
        Value::from("!nullish"),
        Value::function(|v| v.as_str() != Some("")),
    ];
    let guards = Guard::classify_all(&raw).unwrap();
    assert_eq!(is(&Value::from("a"), &guards), Ok(true));
    assert_eq!(is(&Value::from(""), &guards), Ok(false));
    assert_eq!(is(&Value::from(true), &guards), Ok(false));
}

#[test]
fn custom_table_substitution() {
    let table = PredicateTable::builder("extended+even")
        .extend(PredicateTable::extended())
        .with("even", |v: &Value| v.as_f64().is_some_and(|n| n % 2.0 == 0.0))
        .build();
    let engine = GuardEngine::new(&table);

    assert_eq!(engine.is(&Value::from(4), &[Guard::from("even")]), Ok(true));
    assert_eq!(
        engine.is(&Value::from(3), &[Guard::group(["even", "null"])]),
        Ok(false)
    );
    assert!(engine.asserts(&Value::from(3), &[Guard::from("!even")]).is_ok());
    assert!(is(&Value::from(4), &[Guard::from("even")]).is_err());
}
