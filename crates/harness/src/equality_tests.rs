// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use proptest::prelude::*;
use rstest::rstest;

use super::deep_equal;
use attest_tap::{Failure, Value};

#[rstest]
#[case(Value::Number(1.0), Value::Number(1.0), true)]
#[case(Value::Number(f64::NAN), Value::Number(f64::NAN), true)]
#[case(Value::Number(0.0), Value::Number(-0.0), true)]
#[case(Value::Number(1.0), Value::Number(2.0), false)]
#[case(Value::Number(1.0), Value::Text("1".into()), false)]
#[case(Value::Bool(true), Value::Number(1.0), false)]
#[case(Value::Null, Value::Absent, false)]
#[case(Value::Absent, Value::Absent, true)]
#[case(Value::Text("a".into()), Value::Text("a".into()), true)]
#[case(Value::seq([1, 2]), Value::seq([1, 2]), true)]
#[case(Value::seq([1, 2]), Value::seq([2, 1]), false)]
#[case(Value::seq([1]), Value::seq([1, 2]), false)]
#[case(Value::map([("a", 1), ("b", 2)]), Value::map([("b", 2), ("a", 1)]), true)]
#[case(Value::map([("a", 1)]), Value::map([("a", 2)]), false)]
#[case(Value::map([("a", 1)]), Value::map([("b", 1)]), false)]
#[case(
    Value::Failure(Failure::new("TypeError", "boom")),
    Value::Failure(Failure::new("TypeError", "boom")),
    true
)]
#[case(
    Value::Failure(Failure::new("TypeError", "boom")),
    Value::Failure(Failure::new("RangeError", "boom")),
    false
)]
#[case(
    Value::Failure(Failure::new("TypeError", "boom")),
    Value::Failure(Failure::new("TypeError", "bang")),
    false
)]
fn structural_comparison(#[case] a: Value, #[case] b: Value, #[case] equal: bool) {
    assert_eq!(deep_equal(&a, &b), equal);
}

#[test]
fn nested_composites_compare_recursively() {
    let a = Value::map([
        ("items", Value::seq([1, 2, 3])),
        ("label", Value::from("totals")),
    ]);
    let b = Value::map([
        ("label", Value::from("totals")),
        ("items", Value::seq([1, 2, 3])),
    ]);
    assert!(deep_equal(&a, &b));

    let c = Value::map([
        ("items", Value::seq([1, 2, 4])),
        ("label", Value::from("totals")),
    ]);
    assert!(!deep_equal(&a, &c));
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        Just(Value::Absent),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>().prop_map(Value::Number),
        "[a-z]{0,6}".prop_map(Value::Text),
        ("[A-Z][a-z]{0,5}", "[a-z ]{0,8}")
            .prop_map(|(kind, message)| Value::Failure(Failure::new(kind, message))),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
            proptest::collection::btree_map("[a-z]{1,3}", inner, 0..4).prop_map(Value::Map),
        ]
    })
}

proptest! {
    #[test]
    fn equality_is_reflexive(value in value_strategy()) {
        prop_assert!(deep_equal(&value, &value));
    }

    #[test]
    fn equality_is_symmetric(a in value_strategy(), b in value_strategy()) {
        prop_assert_eq!(deep_equal(&a, &b), deep_equal(&b, &a));
    }
}
