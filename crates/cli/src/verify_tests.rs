// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use yare::parameterized;

const EXPECTED: &str = "ABCDEF0123456789ABCDEF0123456789";

#[test]
fn check_passes_case_insensitively() {
    let verdict = check("hash of result: abcdef0123456789abcdef0123456789\n", EXPECTED);
    assert_eq!(
        verdict,
        Verdict::Pass {
            observed: EXPECTED.to_string()
        }
    );
    assert!(verdict.is_pass());
}

#[test]
fn check_lowercase_expected() {
    let verdict = check(
        "hash of result: ABCDEF0123456789ABCDEF0123456789",
        &EXPECTED.to_lowercase(),
    );
    assert!(verdict.is_pass());
}

#[test]
fn check_reports_mismatch() {
    let verdict = check("hash of result: 00000000000000000000000000000000\n", EXPECTED);
    assert_eq!(
        verdict,
        Verdict::Mismatch {
            observed: "00000000000000000000000000000000".to_string(),
            expected: EXPECTED.to_string(),
        }
    );
    assert_eq!(verdict.observed(), Some("00000000000000000000000000000000"));
}

#[test]
fn check_without_hash_line_is_malformed() {
    let verdict = check("reading source...\ndone\n", EXPECTED);
    assert_eq!(
        verdict,
        Verdict::MalformedOutput {
            expected: EXPECTED.to_string()
        }
    );
    assert!(!verdict.is_pass());
    assert_eq!(verdict.observed(), None);
}

#[test]
fn check_empty_output_is_malformed() {
    assert!(matches!(check("", EXPECTED), Verdict::MalformedOutput { .. }));
}

#[test]
fn first_hash_line_wins() {
    let stdout = "\
hash of result: 11111111111111111111111111111111
hash of result: abcdef0123456789abcdef0123456789
";
    assert!(matches!(check(stdout, EXPECTED), Verdict::Mismatch { .. }));
}

#[test]
fn hash_line_among_other_output() {
    let stdout = "\
CZIcmd version 0.62.0
operation: SingleChannelTileAccessor
hash of result: abcdef0123456789abcdef0123456789\r
elapsed 12ms
";
    assert!(check(stdout, EXPECTED).is_pass());
}

#[parameterized(
    not_at_line_start = { "info: hash of result: abcdef0123456789abcdef0123456789" },
    indented = { "  hash of result: abcdef0123456789abcdef0123456789" },
    too_short = { "hash of result: abcdef0123456789abcdef012345678" },
    too_long = { "hash of result: abcdef0123456789abcdef01234567890" },
    non_hex = { "hash of result: abcdef0123456789abcdef012345678g" },
    wrong_case_prefix = { "Hash of result: abcdef0123456789abcdef0123456789" },
    missing_space = { "hash of result:abcdef0123456789abcdef0123456789" },
)]
fn rejects_near_miss_lines(stdout: &str) {
    assert_eq!(extract_hash(stdout), None);
}

#[parameterized(
    end_of_text = { "hash of result: abcdef0123456789abcdef0123456789" },
    newline = { "hash of result: abcdef0123456789abcdef0123456789\n" },
    trailing_text = { "hash of result: abcdef0123456789abcdef0123456789 (md5)" },
    later_line = { "x\nhash of result: abcdef0123456789abcdef0123456789\ny" },
)]
fn accepts_hash_lines(stdout: &str) {
    assert_eq!(
        extract_hash(stdout),
        Some("abcdef0123456789abcdef0123456789")
    );
}

proptest! {
    #[test]
    fn comparison_ignores_case(hash in "[0-9a-fA-F]{32}") {
        let stdout = format!("hash of result: {}\n", hash.to_lowercase());
        prop_assert!(check(&stdout, &hash.to_uppercase()).is_pass());
        prop_assert!(check(&stdout, &hash).is_pass());
    }

    #[test]
    fn arbitrary_output_never_panics(stdout in "\\PC{0,200}") {
        let verdict = check(&stdout, EXPECTED);
        let reported = extract_hash(&stdout).map(str::to_ascii_uppercase);
        prop_assert_eq!(verdict.is_pass(), reported.as_deref() == Some(EXPECTED));
    }
}
