// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case registration modes, outcomes, and the per-case handle.

use crate::assertion::Assertion;
use crate::harness::Shared;
use attest_tap::{AssertionResult, Failure};
use serde::Serialize;
use std::sync::Arc;

/// How a case was registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    Normal,
    /// Exclusive: when any case is registered `Only`, all non-`Only`
    /// cases are skipped before their test function is invoked.
    Only,
    /// Registered but never invoked; excluded from totals.
    Skip,
}

/// Final outcome of one case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseOutcome {
    /// Ran to completion with no failing assertions.
    Passed,
    /// Ran to completion with at least one failing assertion.
    Failed,
    /// Excluded by skip registration or only-filtering.
    Skipped,
    /// The test function raised an uncaught failure (panic or error
    /// return) instead of completing normally.
    Errored { message: String },
    /// The completion signal never settled within the configured
    /// timeout.
    Hung,
}

/// Final report for one case, including its recorded assertions.
#[derive(Clone, Debug, Serialize)]
pub struct CaseReport {
    pub unit: String,
    pub mode: CaseMode,
    pub outcome: CaseOutcome,
    pub assertions: Vec<AssertionResult>,
}

/// What a test function resolves to. `Err` is treated as an uncaught
/// unit failure: reported, escalating the exit status, but never
/// aborting sibling cases.
pub type CaseResult = Result<(), Failure>;

/// Handle passed to a running test function. Cloning shares the same
/// underlying case; assertions recorded through any clone land in the
/// same result sequence.
#[derive(Clone)]
pub struct Case {
    pub(crate) unit: String,
    pub(crate) index: usize,
    pub(crate) shared: Arc<Shared>,
}

impl Case {
    /// Prose name of the unit under test.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Record one assertion: compare the operands, allocate the next
    /// global sequence number, and emit the result to every attached
    /// sink. Synchronous end to end; never raises on mismatch.
    pub fn assert(&self, assertion: Assertion) {
        self.shared.record(self.index, &self.unit, assertion);
    }
}
