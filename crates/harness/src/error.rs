// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness-level failures, reported distinctly from assertion failures
//! so the author can locate a bug in the test itself rather than the
//! unit under test.

use std::time::Duration;
use thiserror::Error;

/// A failure of a test case itself, as opposed to a recorded assertion
/// mismatch. Escalates the run's exit status without stopping sibling
/// cases.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    /// The case's completion signal never settled.
    #[error("did not complete within {timeout:?}")]
    DidNotComplete { unit: String, timeout: Duration },

    /// An uncaught failure escaped the test function.
    #[error("uncaught failure: {message}")]
    Uncaught { unit: String, message: String },
}

impl HarnessError {
    /// The case this failure is attributed to.
    pub fn unit(&self) -> &str {
        match self {
            HarnessError::DidNotComplete { unit, .. } => unit,
            HarnessError::Uncaught { unit, .. } => unit,
        }
    }
}
