// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error capture: invoke a unit and return its failure as a value.

use attest_tap::{Failure, Value};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Failure kind assigned to captured panics.
pub const PANIC_KIND: &str = "panic";

/// Outcome of invoking a unit under test: its normal return value, or
/// the failure it raised, captured as a comparable value.
///
/// Converting into [`Value`] lets a captured outcome sit on either side
/// of an ordinary assertion and flow through the same equality path as
/// everything else, so there is no special-cased "expect-throw" API.
#[derive(Clone, Debug)]
pub enum CapturedOutcome {
    /// The unit completed normally with this value.
    Value(Value),
    /// The unit raised this failure.
    Failure(Failure),
}

impl CapturedOutcome {
    /// Whether the unit completed normally.
    pub fn is_value(&self) -> bool {
        matches!(self, CapturedOutcome::Value(_))
    }

    /// Whether the unit raised a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, CapturedOutcome::Failure(_))
    }
}

impl From<CapturedOutcome> for Value {
    fn from(outcome: CapturedOutcome) -> Self {
        match outcome {
            CapturedOutcome::Value(value) => value,
            CapturedOutcome::Failure(failure) => Value::Failure(failure),
        }
    }
}

/// Invoke a fallible unit, converting its error into a returned value
/// instead of propagating it.
pub fn capture<T, E, F>(unit: F) -> CapturedOutcome
where
    F: FnOnce() -> Result<T, E>,
    T: Into<Value>,
    E: Into<Failure>,
{
    match unit() {
        Ok(value) => CapturedOutcome::Value(value.into()),
        Err(error) => CapturedOutcome::Failure(error.into()),
    }
}

/// Invoke a unit that may panic, converting the panic payload into a
/// [`Failure`] of kind [`PANIC_KIND`].
pub fn capture_unwind<T, F>(unit: F) -> CapturedOutcome
where
    F: FnOnce() -> T,
    T: Into<Value>,
{
    match catch_unwind(AssertUnwindSafe(unit)) {
        Ok(value) => CapturedOutcome::Value(value.into()),
        Err(payload) => CapturedOutcome::Failure(Failure::new(PANIC_KIND, panic_message(payload))),
    }
}

/// Best-effort extraction of a panic payload's message.
pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
