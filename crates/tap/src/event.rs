// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event types for the harness output stream.

use crate::value::Value;
use serde::Serialize;

/// TAP protocol version emitted in the stream header.
pub const TAP_VERSION: u32 = 13;

/// Recorded outcome of a single assertion. Immutable once created.
#[derive(Clone, Debug, Serialize)]
pub struct AssertionResult {
    /// Global 1-based sequence number, monotonic across the whole run.
    pub seq: u64,
    /// Prose name of the unit under test (the case's `describe` name).
    pub unit: String,
    /// Setup description ("Given ...").
    pub given: String,
    /// Expectation description ("should ...").
    pub should: String,
    /// Whether `actual` deep-equals `expected`.
    pub pass: bool,
    /// Observed operand.
    pub actual: Value,
    /// Expected operand.
    pub expected: Value,
}

/// Final pass/fail accounting for a run.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct RunTotals {
    /// Total assertions recorded across all executed cases.
    pub tests: u64,
    /// Passing assertions.
    pub pass: u64,
    /// Failing assertions.
    pub fail: u64,
}

/// One event in the harness output stream.
///
/// Text-mode sinks render these as TAP v13 lines; object-mode sinks hand
/// them to programmatic consumers with the same fields.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TapEvent {
    /// Stream header, emitted once per run before any other event.
    Version { version: u32 },
    /// Emitted when a case starts running, before any of its assertions.
    CaseHeader { unit: String },
    /// Emitted for cases excluded by skip registration or only-filtering.
    CaseSkipped { unit: String },
    /// One recorded assertion.
    Assertion {
        #[serde(flatten)]
        result: AssertionResult,
    },
    /// A harness-level failure attributed to one case: an uncaught
    /// failure escaping the test function, or a case that never settled.
    /// Never counted as a test point.
    HarnessFailure { unit: String, message: String },
    /// Run summary, emitted once after every registered case finalizes.
    Summary {
        #[serde(flatten)]
        totals: RunTotals,
    },
}
