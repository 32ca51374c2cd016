// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::Assertion;
use attest_tap::Value;

#[test]
fn operands_default_to_absent() {
    let assertion = Assertion::new("no operands", "compare as absent");
    assert!(matches!(assertion.actual, Value::Absent));
    assert!(matches!(assertion.expected, Value::Absent));
    assert_eq!(assertion.given, "no operands");
    assert_eq!(assertion.should, "compare as absent");
}

#[test]
fn builder_sets_both_operands() {
    let assertion = Assertion::new("a sum", "match").actual(3).expected(-3);
    assert!(matches!(assertion.actual, Value::Number(n) if n == 3.0));
    assert!(matches!(assertion.expected, Value::Number(n) if n == -3.0));
}
