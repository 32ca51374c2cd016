// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output sinks for the harness event stream.

use crate::encoder::TapEncoder;
use crate::event::{AssertionResult, RunTotals, TapEvent};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Destination for harness events. Every attached sink receives every
/// event, in emission order.
pub trait Sink: Send {
    /// Deliver one event.
    fn event(&mut self, event: &TapEvent) -> io::Result<()>;
}

/// Text-mode sink rendering TAP v13 lines to a writer.
pub struct TextSink<W: Write + Send> {
    encoder: TapEncoder<W>,
}

impl<W: Write + Send> TextSink<W> {
    /// Create a text sink over the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            encoder: TapEncoder::new(writer),
        }
    }

    /// Consume the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.encoder.into_inner()
    }
}

impl TextSink<io::Stdout> {
    /// The default console sink.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Sink for TextSink<W> {
    fn event(&mut self, event: &TapEvent) -> io::Result<()> {
        self.encoder.write_event(event)
    }
}

/// Object-mode sink recording structured events for programmatic
/// consumers.
///
/// Clones share the same underlying buffer, so a handle kept by a test
/// observes everything the harness emits. Optionally appends each event
/// as one JSON line to a file, best-effort.
pub struct EventSink {
    events: Arc<Mutex<Vec<TapEvent>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl EventSink {
    /// Create a new in-memory event sink.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create an event sink that also appends events to a file (JSONL).
    pub fn with_file(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            events: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// All recorded events.
    pub fn events(&self) -> Vec<TapEvent> {
        self.events.lock().clone()
    }

    /// All recorded assertion results, in sequence order.
    pub fn assertions(&self) -> Vec<AssertionResult> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                TapEvent::Assertion { result } => Some(result.clone()),
                _ => None,
            })
            .collect()
    }

    /// Recorded assertions that failed.
    pub fn failed_assertions(&self) -> Vec<AssertionResult> {
        self.assertions().into_iter().filter(|r| !r.pass).collect()
    }

    /// The run summary, if one has been emitted.
    pub fn summary(&self) -> Option<RunTotals> {
        self.events.lock().iter().rev().find_map(|event| match event {
            TapEvent::Summary { totals } => Some(*totals),
            _ => None,
        })
    }

    /// Total number of recorded events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Default for EventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventSink {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

impl Sink for EventSink {
    fn event(&mut self, event: &TapEvent) -> io::Result<()> {
        self.events.lock().push(event.clone());
        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(event) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
