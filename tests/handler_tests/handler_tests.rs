//! Tests for the advance and inspect handlers
//!
//! These tests verify:
//! - Sentences are upper-cased and senders recorded
//! - Numeric and non-hex sentences are rejected without touching State
//! - list / total / unknown inspect routes
//! - Transport failures surface as errors

#[path = "../common/mod.rs"]
mod common;

use common::{advance, advance_raw, inspect, inspect_raw, Recorder};
use dappnode::error::DappError;
use dappnode::handler::{handle, NOT_HEX_DIAGNOSTIC, ROUTE_NOT_IMPLEMENTED};
use dappnode::protocol::Outcome;
use dappnode::State;

// =============================================================================
// Advance Tests
// =============================================================================

#[test]
fn test_advance_accepts_sentence() {
    let mut state = State::new();
    let mut rollup = Recorder::new();

    let outcome = handle(&mut state, &mut rollup, &advance("0xsender", "hello world")).unwrap();

    assert_eq!(outcome, Outcome::Accept);
    assert_eq!(rollup.notices, vec!["HELLO WORLD"]);
    assert!(rollup.reports.is_empty());
    assert_eq!(state.submitters(), &["0xsender"]);
    assert_eq!(state.count(), 1);
}

#[test]
fn test_advance_uppercases_ascii_only() {
    let mut state = State::new();
    let mut rollup = Recorder::new();

    handle(&mut state, &mut rollup, &advance("0xa", "straße é 42x")).unwrap();

    assert_eq!(rollup.notices, vec!["STRAßE é 42X"]);
}

#[test]
fn test_advance_rejects_numeric_sentence() {
    let mut state = State::new();
    let mut rollup = Recorder::new();

    for sentence in ["12345", "-3.5", "1e10"] {
        let outcome = handle(&mut state, &mut rollup, &advance("0xa", sentence)).unwrap();
        assert_eq!(outcome, Outcome::Reject);
    }

    assert!(state.is_empty());
    assert_eq!(state.count(), 0);
    assert!(rollup.notices.is_empty());
    assert_eq!(rollup.reports, vec![NOT_HEX_DIAGNOSTIC; 3]);
}

#[test]
fn test_advance_accepts_out_of_range_number() {
    let mut state = State::new();
    let mut rollup = Recorder::new();

    let outcome = handle(&mut state, &mut rollup, &advance("0xa", "1e400")).unwrap();

    assert_eq!(outcome, Outcome::Accept);
    assert_eq!(rollup.notices, vec!["1E400"]);
    assert_eq!(state.count(), 1);
}

#[test]
fn test_advance_rejects_non_hex_payload() {
    let mut state = State::new();
    let mut rollup = Recorder::new();

    for payload in ["0xzz", "0x123", "not hex at all"] {
        let outcome = handle(&mut state, &mut rollup, &advance_raw("0xa", payload)).unwrap();
        assert_eq!(outcome, Outcome::Reject);
    }

    assert!(state.is_empty());
    assert!(rollup.notices.is_empty());
    assert_eq!(rollup.reports, vec![NOT_HEX_DIAGNOSTIC; 3]);
}

#[test]
fn test_advance_accepts_unprefixed_payload() {
    let mut state = State::new();
    let mut rollup = Recorder::new();

    // "ok" without the 0x prefix, upper-case digits
    let outcome = handle(&mut state, &mut rollup, &advance_raw("0xa", "6F6B")).unwrap();

    assert_eq!(outcome, Outcome::Accept);
    assert_eq!(rollup.notices, vec!["OK"]);
}

#[test]
fn test_advance_notice_failure_is_error() {
    let mut state = State::new();
    let mut rollup = Recorder::new();
    rollup.fail_outputs = true;

    let err = handle(&mut state, &mut rollup, &advance("0xa", "hi")).unwrap_err();

    assert!(err.is_transport_error());
}

#[test]
fn test_advance_report_failure_is_error() {
    let mut state = State::new();
    let mut rollup = Recorder::new();
    rollup.fail_outputs = true;

    let err = handle(&mut state, &mut rollup, &advance("0xa", "7")).unwrap_err();

    assert!(matches!(err, DappError::HttpStatus { status: 500, .. }));
    assert!(state.is_empty());
}

// =============================================================================
// Inspect Tests
// =============================================================================

fn state_with(senders: &[&str]) -> State {
    let mut state = State::new();
    for sender in senders {
        state.record_submission(*sender);
    }
    state
}

#[test]
fn test_inspect_list_in_submission_order() {
    let mut state = state_with(&["0xc", "0xa", "0xb"]);
    let mut rollup = Recorder::new();

    let outcome = handle(&mut state, &mut rollup, &inspect("list")).unwrap();

    assert_eq!(outcome, Outcome::Accept);
    assert_eq!(rollup.reports, vec![r#"["0xc","0xa","0xb"]"#]);
}

#[test]
fn test_inspect_total() {
    let mut state = state_with(&["0xa", "0xa"]);
    let mut rollup = Recorder::new();

    handle(&mut state, &mut rollup, &inspect("total")).unwrap();

    assert_eq!(rollup.reports, vec!["2"]);
}

#[test]
fn test_inspect_unknown_route() {
    let mut state = state_with(&["0xa"]);
    let before = state.clone();
    let mut rollup = Recorder::new();

    let outcome = handle(&mut state, &mut rollup, &inspect("foo")).unwrap();

    assert_eq!(outcome, Outcome::Accept);
    assert_eq!(rollup.reports, vec![ROUTE_NOT_IMPLEMENTED]);
    assert_eq!(state, before);
}

#[test]
fn test_inspect_never_emits_notices() {
    let mut state = state_with(&["0xa"]);
    let mut rollup = Recorder::new();

    for route in ["list", "total", "other"] {
        handle(&mut state, &mut rollup, &inspect(route)).unwrap();
    }

    assert!(rollup.notices.is_empty());
    assert_eq!(rollup.reports.len(), 3);
}

#[test]
fn test_inspect_bad_hex_is_decode_error() {
    let mut state = State::new();
    let mut rollup = Recorder::new();

    let err = handle(&mut state, &mut rollup, &inspect_raw("0xlist")).unwrap_err();

    assert!(matches!(err, DappError::Decode(_)));
    assert!(rollup.reports.is_empty());
}

#[test]
fn test_inspect_report_failure_is_error() {
    let mut state = State::new();
    let mut rollup = Recorder::new();
    rollup.fail_outputs = true;

    let err = handle(&mut state, &mut rollup, &inspect("total")).unwrap_err();

    assert!(err.is_transport_error());
}
