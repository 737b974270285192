//! Guard Entry Points Example
//!
//! Shows `is`, `asserts`, `create_filter` and the primitive table.
//!
//! Run with: cargo run --example guards

use type_guards::prelude::*;

fn main() {
    println!("=== Guard Entry Points Example ===\n");

    checking_values();
    asserting_values();
    reusable_filters();
    primitive_table();
}

fn checking_values() {
    println!("--- is ---\n");

    // (string or plainObject) and not null
    let guards = [Guard::group(["string", "plainObject"]), Guard::from("!null")];
    let record = Value::object([("id", Value::from(7))]);

    for value in [Value::from("hi"), record, Value::Null, Value::from(3)] {
        println!("  {:<16} -> {:?}", value.to_string(), is(&value, &guards));
    }

    // unknown tokens are errors, not `false`
    println!("\n  unknown token: {:?}", is(&Value::Null, &[Guard::from("integer")]));
}

fn asserting_values() {
    println!("\n--- asserts ---\n");

    match asserts(&Value::from(1e21), &[Guard::from("string")]) {
        Ok(()) => println!("  accepted"),
        Err(e) => println!("  {}", e),
    }
    println!(
        "  array passes `array`: {:?}",
        asserts(&Value::array([1, 2]), &[Guard::from("array")])
    );
}

fn reusable_filters() {
    println!("\n--- create_filter ---\n");

    let positive = match create_filter([
        Guard::from("number"),
        Guard::custom(|v| v.as_f64().is_some_and(|n| n > 0.0)),
    ]) {
        Ok(filter) => filter,
        Err(e) => {
            println!("  could not build filter: {}", e);
            return;
        }
    };

    let values: Vec<Value> = [-1, 0, 1, 2].into_iter().map(Value::from).collect();
    let selected: Vec<String> = positive.select(&values).iter().map(|v| v.to_string()).collect();
    println!("  positive numbers: [{}]", selected.join(", "));
}

fn primitive_table() {
    println!("\n--- primitive ---\n");

    let list = Value::array([1, 2]);
    println!(
        "  primitive `object` on array: {:?}",
        primitive::is(&list, &[Guard::from("object")])
    );
    println!(
        "  extended `object` on array:  {:?}",
        is(&list, &[Guard::from("object")])
    );
    println!(
        "  primitive `array`:           {:?}",
        primitive::is(&list, &[Guard::from("array")]).map_err(|e| e.to_string())
    );
    println!(
        "  primitive asserts on null:   {:?}",
        primitive::asserts(&Value::Null, &[Guard::from("string")]).map_err(|e| e.to_string())
    );
}
