// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text encoder producing TAP v13 lines from harness events.

use crate::event::TapEvent;
use std::io::Write;

/// Renders [`TapEvent`]s as TAP v13 text to any writer.
///
/// Failing assertions carry a YAML-ish diagnostic block with the
/// serialized `actual` and `expected` operands, so a failure can be
/// reproduced without re-running the suite. Skipped cases and
/// harness-level failures render as comment lines, which keeps the
/// `1..N` plan equal to the number of recorded assertions.
pub struct TapEncoder<W: Write> {
    writer: W,
}

impl<W: Write> TapEncoder<W> {
    /// Create an encoder over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the encoder, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render one event. Each event is flushed so output is visible
    /// incrementally.
    pub fn write_event(&mut self, event: &TapEvent) -> std::io::Result<()> {
        match event {
            TapEvent::Version { version } => {
                writeln!(self.writer, "TAP version {}", version)?;
            }
            TapEvent::CaseHeader { unit } => {
                writeln!(self.writer, "# {}", unit)?;
            }
            TapEvent::CaseSkipped { unit } => {
                writeln!(self.writer, "# SKIP {}", unit)?;
            }
            TapEvent::Assertion { result } => {
                let status = if result.pass { "ok" } else { "not ok" };
                writeln!(
                    self.writer,
                    "{} {} Given {}: should {}",
                    status, result.seq, result.given, result.should
                )?;
                if !result.pass {
                    writeln!(self.writer, "  ---")?;
                    writeln!(self.writer, "  actual: {}", result.actual)?;
                    writeln!(self.writer, "  expected: {}", result.expected)?;
                    writeln!(self.writer, "  ---")?;
                }
            }
            TapEvent::HarnessFailure { unit, message } => {
                writeln!(self.writer, "# ERROR {}: {}", unit, message)?;
            }
            TapEvent::Summary { totals } => {
                writeln!(self.writer)?;
                writeln!(self.writer, "1..{}", totals.tests)?;
                writeln!(self.writer, "# tests {}", totals.tests)?;
                writeln!(self.writer, "# pass  {}", totals.pass)?;
                if totals.fail > 0 {
                    writeln!(self.writer, "# fail  {}", totals.fail)?;
                } else {
                    writeln!(self.writer)?;
                    writeln!(self.writer, "# ok")?;
                }
            }
        }
        self.writer.flush()
    }
}

#[cfg(test)]
#[path = "encoder_tests.rs"]
mod tests;
