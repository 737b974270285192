//! Property-based tests for guard evaluation

use proptest::prelude::*;
use type_guards::testing::arb_value;
use type_guards::{is, primitive, Guard, Value};

const EXTENDED_TOKENS: [&str; 12] = [
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
    "plainObject",
    "nullish",
];

proptest! {
    #[test]
    fn prop_token_and_negation_are_exclusive(v in arb_value(), idx in 0usize..12) {
        let token = EXTENDED_TOKENS[idx];
        let yes = is(&v, &[Guard::token(token)]).unwrap();
        let no = is(&v, &[Guard::token(format!("!{}", token))]).unwrap();
        prop_assert_ne!(yes, no);
    }

    #[test]
    fn prop_not_array_is_complement(v in arb_value()) {
        let array = is(&v, &[Guard::from("array")]).unwrap();
        prop_assert_eq!(is(&v, &[Guard::from("!array")]), Ok(!array));
    }

    #[test]
    fn prop_no_guards_is_true(v in arb_value()) {
        prop_assert_eq!(is(&v, &[]), Ok(true));
    }

    #[test]
    fn prop_empty_group_is_false(v in arb_value()) {
        prop_assert_eq!(is(&v, &[Guard::Group(Vec::new())]), Ok(false));
    }

    #[test]
    fn prop_group_is_disjunction(v in arb_value(), a in 0usize..12, b in 0usize..12) {
        let (ta, tb) = (EXTENDED_TOKENS[a], EXTENDED_TOKENS[b]);
        let either = is(&v, &[Guard::from(ta)]).unwrap() || is(&v, &[Guard::from(tb)]).unwrap();
        prop_assert_eq!(is(&v, &[Guard::group([ta, tb])]), Ok(either));
    }

    #[test]
    fn prop_list_is_conjunction(v in arb_value(), a in 0usize..12, b in 0usize..12) {
        let (ta, tb) = (EXTENDED_TOKENS[a], EXTENDED_TOKENS[b]);
        let both = is(&v, &[Guard::from(ta)]).unwrap() && is(&v, &[Guard::from(tb)]).unwrap();
        prop_assert_eq!(is(&v, &[Guard::from(ta), Guard::from(tb)]), Ok(both));
    }

    #[test]
    fn prop_primitive_object_is_typeof(v in arb_value()) {
        let expected = v.type_name() == "object";
        prop_assert_eq!(primitive::is(&v, &[Guard::from("object")]), Ok(expected));
    }

    #[test]
    fn prop_extended_tokens_refine_primitive(v in arb_value()) {
        // extended object implies primitive object, never the other way for null/arrays
        let extended = is(&v, &[Guard::from("object")]).unwrap();
        let wide = primitive::is(&v, &[Guard::from("object")]).unwrap();
        prop_assert!(!extended || wide);
        if matches!(v, Value::Null | Value::Array(_)) {
            prop_assert!(wide && !extended);
        }
    }
}
