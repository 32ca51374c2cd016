// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TAP v13 protocol layer for the attest harness.
//!
//! This crate owns the pieces that do not depend on the runtime: the
//! structural [`Value`] model assertions compare over, the [`TapEvent`]
//! stream emitted for every assertion and run summary, the text
//! [`TapEncoder`] producing TAP v13 lines, and the pluggable output
//! [`Sink`]s (text mode and object mode) those events flow into.

mod encoder;
mod event;
mod sink;
mod value;

pub use encoder::TapEncoder;
pub use event::{AssertionResult, RunTotals, TapEvent, TAP_VERSION};
pub use sink::{EventSink, Sink, TextSink};
pub use value::{count_keys, Failure, Value};
