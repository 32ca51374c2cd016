// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The run context: registration, cooperative execution, completion
//! tracking, and summary emission.

use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::LocalSet;
use tokio::time::timeout;

use attest_tap::{
    AssertionResult, EventSink, RunTotals, Sink, TapEvent, TextSink, TAP_VERSION,
};

use crate::assertion::{Assertion, DESCRIPTION_FALLBACK};
use crate::capture::panic_message;
use crate::case::{Case, CaseMode, CaseOutcome, CaseReport, CaseResult};
use crate::equality::deep_equal;
use crate::error::HarnessError;

/// Process exit codes derived from a run summary.
pub mod exit_codes {
    /// Every assertion passed and every case settled cleanly.
    pub const SUCCESS: i32 = 0;
    /// At least one assertion failed or a harness-level failure occurred.
    pub const FAILURE: i32 = 1;
}

/// Tunables for a run.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Attach the default stdout text sink at run start.
    pub console: bool,
    /// How long a case's completion signal may stay unsettled before
    /// the case is reported as hung. Measured from the moment the
    /// runner awaits that case's completion, not from task start, so a
    /// slow earlier case extends a later case's effective wall-clock
    /// budget. The bound never under-waits.
    pub case_timeout: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            console: true,
            case_timeout: Duration::from_secs(30),
        }
    }
}

/// Lifecycle of a registered case. Each case settles exactly once: the
/// runner holds its completion handle and awaits it a single time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CaseState {
    Registered,
    Running,
    Completed,
    Finalized,
}

struct CaseSlot {
    unit: String,
    mode: CaseMode,
    state: CaseState,
    outcome: Option<CaseOutcome>,
    results: Vec<AssertionResult>,
}

/// State shared between the harness, every case handle, and the runner:
/// the global sequence counter, the attached sinks, and the case table.
/// Execution is single-threaded cooperative, so each record/emit call
/// runs to completion without interruption.
pub(crate) struct Shared {
    seq: AtomicU64,
    sinks: Mutex<Vec<Box<dyn Sink>>>,
    cases: Mutex<Vec<CaseSlot>>,
}

impl Shared {
    fn new() -> Self {
        Self {
            seq: AtomicU64::new(0),
            sinks: Mutex::new(Vec::new()),
            cases: Mutex::new(Vec::new()),
        }
    }

    /// Deliver one event to every attached sink, best-effort.
    fn emit(&self, event: &TapEvent) {
        for sink in self.sinks.lock().iter_mut() {
            let _ = sink.event(event);
        }
    }

    fn set_state(&self, index: usize, state: CaseState) {
        if let Some(slot) = self.cases.lock().get_mut(index) {
            slot.state = state;
        }
    }

    fn finalize(&self, index: usize, outcome: CaseOutcome) {
        if let Some(slot) = self.cases.lock().get_mut(index) {
            slot.state = CaseState::Finalized;
            slot.outcome = Some(outcome);
        }
    }

    fn case_failed(&self, index: usize) -> bool {
        self.cases
            .lock()
            .get(index)
            .is_some_and(|slot| slot.results.iter().any(|r| !r.pass))
    }

    /// Record one assertion for the given case: validate descriptions,
    /// compare, allocate the next sequence number, append, emit.
    pub(crate) fn record(&self, index: usize, unit: &str, assertion: Assertion) {
        let Assertion {
            given,
            should,
            actual,
            expected,
        } = assertion;
        let given = non_empty(given);
        let should = non_empty(should);
        let pass = deep_equal(&actual, &expected);
        let result = {
            let mut cases = self.cases.lock();
            let Some(slot) = cases.get_mut(index) else {
                return;
            };
            // A finalized case's result sequence is immutable; a leaked
            // handle recording late is dropped rather than reopening it.
            // The sequence number is allocated only after this guard, so
            // a dropped record never leaves a gap in the emitted stream.
            if slot.state == CaseState::Finalized {
                return;
            }
            let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
            let result = AssertionResult {
                seq,
                unit: unit.to_string(),
                given,
                should,
                pass,
                actual,
                expected,
            };
            slot.results.push(result.clone());
            result
        };
        self.emit(&TapEvent::Assertion { result });
    }
}

fn non_empty(description: String) -> String {
    if description.is_empty() {
        DESCRIPTION_FALLBACK.to_string()
    } else {
        description
    }
}

type CaseFuture = Pin<Box<dyn Future<Output = CaseResult>>>;

struct PendingCase {
    index: usize,
    unit: String,
    mode: CaseMode,
    run: Box<dyn FnOnce(Case) -> CaseFuture>,
}

/// Explicit run context: owns the sequence counter, the sinks, and the
/// registered cases. Created once per run instead of living as a
/// process-wide singleton, which keeps the counter and sinks testable
/// in isolation.
pub struct Harness {
    config: HarnessConfig,
    shared: Arc<Shared>,
    pending: Mutex<Vec<PendingCase>>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(HarnessConfig::default())
    }
}

impl Harness {
    /// Create a harness with the given configuration.
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            shared: Arc::new(Shared::new()),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// The configuration this run will use.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Attach an output sink. Every sink receives every event.
    pub fn attach_sink(&self, sink: Box<dyn Sink>) {
        self.shared.sinks.lock().push(sink);
    }

    /// Attach a text-mode sink over the given writer.
    pub fn attach_text<W: Write + Send + 'static>(&self, writer: W) {
        self.attach_sink(Box::new(TextSink::new(writer)));
    }

    /// Attach a fresh object-mode sink and return a handle sharing its
    /// event buffer.
    pub fn attach_events(&self) -> EventSink {
        let sink = EventSink::new();
        self.attach_sink(Box::new(sink.clone()));
        sink
    }

    /// Register a test case. The test function receives a [`Case`]
    /// handle bound to this harness and runs as a cooperative task when
    /// [`Harness::run`] drives the suite.
    pub fn describe<F, Fut>(&self, unit: impl Into<String>, test: F)
    where
        F: FnOnce(Case) -> Fut + 'static,
        Fut: Future<Output = CaseResult> + 'static,
    {
        self.register(unit, CaseMode::Normal, test);
    }

    /// Register an exclusive case: when any case is exclusive, only
    /// exclusive cases execute and count toward the summary.
    pub fn describe_only<F, Fut>(&self, unit: impl Into<String>, test: F)
    where
        F: FnOnce(Case) -> Fut + 'static,
        Fut: Future<Output = CaseResult> + 'static,
    {
        self.register(unit, CaseMode::Only, test);
    }

    /// Register a case that is never invoked; it appears in output as a
    /// skip marker and is excluded from totals.
    pub fn describe_skip<F, Fut>(&self, unit: impl Into<String>, test: F)
    where
        F: FnOnce(Case) -> Fut + 'static,
        Fut: Future<Output = CaseResult> + 'static,
    {
        self.register(unit, CaseMode::Skip, test);
    }

    /// Register a case with an explicit mode.
    pub fn register<F, Fut>(&self, unit: impl Into<String>, mode: CaseMode, test: F)
    where
        F: FnOnce(Case) -> Fut + 'static,
        Fut: Future<Output = CaseResult> + 'static,
    {
        let unit = unit.into();
        let index = {
            let mut cases = self.shared.cases.lock();
            cases.push(CaseSlot {
                unit: unit.clone(),
                mode,
                state: CaseState::Registered,
                outcome: None,
                results: Vec::new(),
            });
            cases.len() - 1
        };
        self.pending.lock().push(PendingCase {
            index,
            unit,
            mode,
            run: Box::new(move |case| Box::pin(test(case))),
        });
    }

    /// Drive every selected case to completion and emit the summary.
    ///
    /// Cases run concurrently as cooperative tasks on a single-threaded
    /// [`LocalSet`]; sequence numbers and emitted events are totally
    /// ordered by the order in which `assert` calls execute. A case
    /// whose completion signal does not settle within
    /// [`HarnessConfig::case_timeout`] is aborted and reported as hung.
    ///
    /// The returned future is not `Send`; drive it on a current-thread
    /// runtime.
    pub async fn run(self) -> RunSummary {
        let Harness {
            config,
            shared,
            pending,
        } = self;

        if config.console {
            shared.sinks.lock().insert(0, Box::new(TextSink::stdout()));
        }
        shared.emit(&TapEvent::Version {
            version: TAP_VERSION,
        });

        let pending = pending.into_inner();
        let only_mode = pending.iter().any(|case| case.mode == CaseMode::Only);

        let local = LocalSet::new();
        let mut joins = Vec::new();
        for case in pending {
            let excluded =
                case.mode == CaseMode::Skip || (only_mode && case.mode != CaseMode::Only);
            if excluded {
                shared.finalize(case.index, CaseOutcome::Skipped);
                shared.emit(&TapEvent::CaseSkipped { unit: case.unit });
                continue;
            }

            let handle = Case {
                unit: case.unit.clone(),
                index: case.index,
                shared: Arc::clone(&shared),
            };
            let task_shared = Arc::clone(&shared);
            let task_unit = case.unit.clone();
            let index = case.index;
            let run = case.run;
            let join = local.spawn_local(async move {
                task_shared.set_state(index, CaseState::Running);
                task_shared.emit(&TapEvent::CaseHeader { unit: task_unit });
                run(handle).await
            });
            joins.push((case.index, case.unit, join));
        }

        let mut harness_errors = Vec::new();
        let runner_shared = Arc::clone(&shared);
        local
            .run_until(async {
                for (index, unit, mut join) in joins {
                    let outcome = match timeout(config.case_timeout, &mut join).await {
                        Ok(Ok(Ok(()))) => {
                            let failed = runner_shared.case_failed(index);
                            runner_shared.set_state(index, CaseState::Completed);
                            if failed {
                                CaseOutcome::Failed
                            } else {
                                CaseOutcome::Passed
                            }
                        }
                        Ok(Ok(Err(failure))) => {
                            runner_shared.set_state(index, CaseState::Completed);
                            let error = HarnessError::Uncaught {
                                unit: unit.clone(),
                                message: failure.to_string(),
                            };
                            runner_shared.emit(&TapEvent::HarnessFailure {
                                unit: unit.clone(),
                                message: error.to_string(),
                            });
                            let message = error.to_string();
                            harness_errors.push(error);
                            CaseOutcome::Errored { message }
                        }
                        Ok(Err(join_error)) => {
                            runner_shared.set_state(index, CaseState::Completed);
                            let message = if join_error.is_panic() {
                                panic_message(join_error.into_panic())
                            } else {
                                "task was cancelled".to_string()
                            };
                            let error = HarnessError::Uncaught {
                                unit: unit.clone(),
                                message,
                            };
                            runner_shared.emit(&TapEvent::HarnessFailure {
                                unit: unit.clone(),
                                message: error.to_string(),
                            });
                            let message = error.to_string();
                            harness_errors.push(error);
                            CaseOutcome::Errored { message }
                        }
                        Err(_elapsed) => {
                            join.abort();
                            let error = HarnessError::DidNotComplete {
                                unit: unit.clone(),
                                timeout: config.case_timeout,
                            };
                            runner_shared.emit(&TapEvent::HarnessFailure {
                                unit: unit.clone(),
                                message: error.to_string(),
                            });
                            harness_errors.push(error);
                            CaseOutcome::Hung
                        }
                    };
                    runner_shared.finalize(index, outcome);
                }
            })
            .await;

        let mut totals = RunTotals::default();
        let reports: Vec<CaseReport> = shared
            .cases
            .lock()
            .iter()
            .map(|slot| {
                for result in &slot.results {
                    totals.tests += 1;
                    if result.pass {
                        totals.pass += 1;
                    } else {
                        totals.fail += 1;
                    }
                }
                CaseReport {
                    unit: slot.unit.clone(),
                    mode: slot.mode,
                    outcome: slot.outcome.clone().unwrap_or(CaseOutcome::Skipped),
                    assertions: slot.results.clone(),
                }
            })
            .collect();

        shared.emit(&TapEvent::Summary { totals });

        RunSummary {
            totals,
            reports,
            harness_errors,
        }
    }
}

/// Everything known about a finished run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Assertion totals across all executed cases.
    pub totals: RunTotals,
    /// Per-case reports, in registration order.
    pub reports: Vec<CaseReport>,
    /// Harness-level failures (uncaught unit failures, hung cases).
    pub harness_errors: Vec<HarnessError>,
}

impl RunSummary {
    /// Whether the run passed: no failing assertions and no
    /// harness-level failures.
    pub fn ok(&self) -> bool {
        self.totals.fail == 0 && self.harness_errors.is_empty()
    }

    /// Exit status for the process: [`exit_codes::SUCCESS`] when
    /// [`RunSummary::ok`], [`exit_codes::FAILURE`] otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.ok() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
