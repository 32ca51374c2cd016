// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assertion-oriented test harness emitting TAP v13 streams.
//!
//! Every recorded assertion carries enough context to reproduce a
//! failure without re-running the suite: the unit under test, the
//! scenario (`given`), the expectation (`should`), and both operands.
//! Results stream to attached sinks as TAP v13 text or structured
//! events.
//!
//! Cases run as cooperative tasks on a single-threaded scheduler; the
//! harness itself never assumes parallelism.
//!
//! ```
//! use attest::{Assertion, Harness, HarnessConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let harness = Harness::new(HarnessConfig {
//!     console: false,
//!     ..HarnessConfig::default()
//! });
//! let events = harness.attach_events();
//!
//! harness.describe("sum()", |t| async move {
//!     t.assert(Assertion::new("no arguments", "return 0").actual(0).expected(0));
//!     Ok(())
//! });
//!
//! let summary = harness.run().await;
//! assert_eq!(summary.exit_code(), 0);
//! assert_eq!(events.assertions().len(), 1);
//! # }
//! ```

mod assertion;
mod capture;
mod case;
mod equality;
mod error;
mod harness;

pub use assertion::{Assertion, DESCRIPTION_FALLBACK};
pub use capture::{capture, capture_unwind, CapturedOutcome, PANIC_KIND};
pub use case::{Case, CaseMode, CaseOutcome, CaseReport, CaseResult};
pub use equality::deep_equal;
pub use error::HarnessError;
pub use harness::{exit_codes, Harness, HarnessConfig, RunSummary};

pub use attest_tap::{
    count_keys, AssertionResult, EventSink, Failure, RunTotals, Sink, TapEncoder, TapEvent,
    TextSink, Value, TAP_VERSION,
};
