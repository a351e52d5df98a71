// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use rstest::rstest;
use tempfile::TempDir;

fn argv() -> Vec<String> {
    vec!["CZIcmd".to_string(), "--calc-hash".to_string()]
}

fn passed() -> CaseOutcome {
    CaseOutcome::Passed {
        hash: "ABCDEF0123456789ABCDEF0123456789".to_string(),
    }
}

fn mismatch() -> CaseOutcome {
    CaseOutcome::Mismatch {
        observed: "00000000000000000000000000000000".to_string(),
        expected: "ABCDEF0123456789ABCDEF0123456789".to_string(),
    }
}

#[test]
fn test_record_and_retrieve() {
    let log = CaptureLog::new();

    log.record(1, argv(), Duration::from_millis(5), passed())
        .unwrap();

    assert_eq!(log.len(), 1);
    let records = log.records();
    assert_eq!(records[0].seq, 1);
    assert_eq!(records[0].argv, argv());
    assert!(records[0].outcome.is_pass());
}

#[rstest]
#[case(0, 0)]
#[case(3, 0)]
#[case(0, 4)]
#[case(2, 5)]
fn test_passes_and_failures_partition(#[case] pass_count: usize, #[case] fail_count: usize) {
    let log = CaptureLog::new();
    let mut seq = 1;
    for _ in 0..pass_count {
        log.record(seq, argv(), Duration::ZERO, passed()).unwrap();
        seq += 1;
    }
    for _ in 0..fail_count {
        log.record(seq, argv(), Duration::ZERO, mismatch()).unwrap();
        seq += 1;
    }

    assert_eq!(log.passes().len(), pass_count);
    assert_eq!(log.failures().len(), fail_count);
    assert_eq!(log.len(), pass_count + fail_count);
    assert_eq!(log.is_empty(), pass_count + fail_count == 0);
}

#[test]
fn test_count_by_kind() {
    let log = CaptureLog::new();
    log.record(1, argv(), Duration::ZERO, mismatch()).unwrap();
    log.record(
        2,
        argv(),
        Duration::ZERO,
        CaseOutcome::MalformedOutput {
            expected: "AB".to_string(),
        },
    )
    .unwrap();
    log.record(
        3,
        argv(),
        Duration::ZERO,
        CaseOutcome::LaunchFailure {
            message: "not found".to_string(),
        },
    )
    .unwrap();

    let malformed = log.count(|r| matches!(r.outcome, CaseOutcome::MalformedOutput { .. }));
    assert_eq!(malformed, 1);
    assert_eq!(log.failures().len(), 3);
}

#[test]
fn test_clone_shares_records() {
    let log = CaptureLog::new();
    let clone = log.clone();
    clone.record(1, argv(), Duration::ZERO, passed()).unwrap();
    assert_eq!(log.len(), 1);
}

#[test]
fn test_with_file_writes_jsonl() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("capture.jsonl");
    let log = CaptureLog::with_file(&path).unwrap();

    log.record(1, argv(), Duration::from_millis(2), passed())
        .unwrap();
    log.record(2, argv(), Duration::from_millis(3), mismatch())
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(r#""type":"passed""#));
    assert!(lines[1].contains(r#""type":"mismatch""#));

    let parsed: CaseRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(parsed.seq, 2);
}

#[test]
fn test_with_file_fails_for_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("capture.jsonl");
    assert!(CaptureLog::with_file(&path).is_err());
}

proptest! {
    #[test]
    fn len_equals_record_count(count in 0usize..100) {
        let log = CaptureLog::new();
        for i in 0..count {
            log.record(i as u64 + 1, argv(), Duration::ZERO, passed()).unwrap();
        }
        prop_assert_eq!(log.len(), count);
    }

    #[test]
    fn records_keep_insertion_order(count in 1usize..50) {
        let log = CaptureLog::new();
        for i in 0..count {
            log.record(i as u64 + 1, argv(), Duration::ZERO, mismatch()).unwrap();
        }
        for (i, record) in log.records().iter().enumerate() {
            prop_assert_eq!(record.seq, i as u64 + 1);
        }
    }
}
