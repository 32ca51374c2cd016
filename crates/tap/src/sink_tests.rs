// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::{EventSink, Sink, TextSink};
use crate::event::{AssertionResult, RunTotals, TapEvent, TAP_VERSION};
use crate::value::Value;

fn sample_assertion(seq: u64, pass: bool) -> TapEvent {
    TapEvent::Assertion {
        result: AssertionResult {
            seq,
            unit: "unit".to_string(),
            given: "a value".to_string(),
            should: "match".to_string(),
            pass,
            actual: Value::Number(1.0),
            expected: Value::Number(if pass { 1.0 } else { 2.0 }),
        },
    }
}

#[test]
fn event_sink_records_and_shares_with_clones() {
    let sink = EventSink::new();
    let mut writer_handle = sink.clone();
    writer_handle.event(&TapEvent::Version { version: TAP_VERSION }).unwrap();
    writer_handle.event(&sample_assertion(1, true)).unwrap();

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.assertions().len(), 1);
    assert!(sink.failed_assertions().is_empty());
    assert!(sink.summary().is_none());

    sink.clear();
    assert!(sink.is_empty());
}

#[test]
fn event_sink_surfaces_failures_and_summary() {
    let mut sink = EventSink::new();
    sink.event(&sample_assertion(1, false)).unwrap();
    sink.event(&TapEvent::Summary {
        totals: RunTotals { tests: 1, pass: 0, fail: 1 },
    })
    .unwrap();

    let failed = sink.failed_assertions();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].seq, 1);
    let totals = sink.summary().unwrap();
    assert_eq!((totals.tests, totals.pass, totals.fail), (1, 0, 1));
}

#[test]
fn event_sink_appends_jsonl_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let mut sink = EventSink::with_file(&path).unwrap();
    sink.event(&TapEvent::Version { version: TAP_VERSION }).unwrap();
    sink.event(&sample_assertion(1, true)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["type"], "version");
    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["type"], "assertion");
    assert_eq!(second["seq"], 1);
    assert_eq!(second["pass"], true);
}

#[test]
fn text_sink_writes_tap_lines() {
    let mut sink = TextSink::new(Vec::new());
    sink.event(&TapEvent::Version { version: TAP_VERSION }).unwrap();
    sink.event(&TapEvent::CaseHeader { unit: "unit".to_string() }).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text, "TAP version 13\n# unit\n");
}
