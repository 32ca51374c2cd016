// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural deep equality between assertion operands.

use attest_tap::Value;

/// Structural, deterministic deep equality. Pure.
///
/// Semantics:
/// - `NaN` equals `NaN`; `+0` equals `-0`.
/// - No coercion across variants: `"1"` is not `1`, `null` is not
///   absent.
/// - Sequences are order-sensitive; maps compare by key set.
/// - Failures compare by kind and message, never identity.
///
/// `Value` owns its children, so the recursion always terminates.
pub fn deep_equal(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Absent, Value::Absent) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(*a, *b),
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Seq(a), Value::Seq(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Map(a), Value::Map(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, va)| b.get(key).is_some_and(|vb| deep_equal(va, vb)))
        }
        (Value::Failure(a), Value::Failure(b)) => a.kind == b.kind && a.message == b.message,
        _ => false,
    }
}

fn numbers_equal(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    // IEEE equality already treats +0 and -0 as equal.
    a == b
}

#[cfg(test)]
#[path = "equality_tests.rs"]
mod tests;
