// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::{capture, capture_unwind, CapturedOutcome, PANIC_KIND};
use crate::equality::deep_equal;
use attest_tap::{Failure, Value};

#[test]
fn passes_normal_return_values_through() {
    let outcome = capture(|| "7".parse::<i32>());
    assert!(outcome.is_value());
    let value = Value::from(outcome);
    assert!(deep_equal(&value, &Value::Number(7.0)));
}

#[test]
fn converts_errors_into_returned_failures() {
    let outcome = capture(|| "x".parse::<i32>());
    assert!(outcome.is_failure());
    match outcome {
        CapturedOutcome::Failure(failure) => {
            assert_eq!(failure.kind, "ParseIntError");
            assert_eq!(failure.message, "invalid digit found in string");
        }
        CapturedOutcome::Value(value) => panic!("expected a failure, got {}", value),
    }
}

#[test]
fn captured_failure_deep_equals_an_expected_failure_value() {
    let actual = Value::from(capture(|| "x".parse::<i32>()));
    let expected = Value::Failure(Failure::new("ParseIntError", "invalid digit found in string"));
    assert!(deep_equal(&actual, &expected));

    let wrong_kind = Value::Failure(Failure::new("Utf8Error", "invalid digit found in string"));
    assert!(!deep_equal(&actual, &wrong_kind));
}

#[test]
fn captures_panics_with_the_panic_kind() {
    let outcome = capture_unwind(|| -> i32 { panic!("boom") });
    match outcome {
        CapturedOutcome::Failure(failure) => {
            assert_eq!(failure.kind, PANIC_KIND);
            assert_eq!(failure.message, "boom");
        }
        CapturedOutcome::Value(value) => panic!("expected a failure, got {}", value),
    }
}

#[test]
fn unwind_capture_passes_values_through_when_nothing_panics() {
    let outcome = capture_unwind(|| 41 + 1);
    let value = Value::from(outcome);
    assert!(deep_equal(&value, &Value::Number(42.0)));
}
