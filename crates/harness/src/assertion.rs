// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion input: a description pair plus the two operands.

use attest_tap::Value;

/// Substituted when `given` or `should` is registered empty, so a
/// sloppy call site still produces a locatable TAP line.
pub const DESCRIPTION_FALLBACK: &str = "(unspecified)";

/// One assertion to record.
///
/// Operands left unset default to [`Value::Absent`]; two absent
/// operands compare equal, so `Assertion::new(..)` alone records a
/// passing assertion.
#[derive(Clone, Debug)]
pub struct Assertion {
    /// Setup description, rendered as `Given <given>`.
    pub given: String,
    /// Expectation description, rendered as `should <should>`.
    pub should: String,
    /// Observed operand.
    pub actual: Value,
    /// Expected operand.
    pub expected: Value,
}

impl Assertion {
    /// Start an assertion from its description pair.
    pub fn new(given: impl Into<String>, should: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            should: should.into(),
            actual: Value::Absent,
            expected: Value::Absent,
        }
    }

    /// Set the observed operand.
    pub fn actual(mut self, value: impl Into<Value>) -> Self {
        self.actual = value.into();
        self
    }

    /// Set the expected operand.
    pub fn expected(mut self, value: impl Into<Value>) -> Self {
        self.expected = value.into();
        self
    }
}

#[cfg(test)]
#[path = "assertion_tests.rs"]
mod tests;
