// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for harness integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const EXPECTED: &str = "ABCDEF0123456789ABCDEF0123456789";
pub const ZEROS: &str = "00000000000000000000000000000000";

/// Path to the CZIcmd stand-in built alongside the harness
pub fn stub_bin() -> &'static str {
    env!("CARGO_BIN_EXE_czicmd-stub")
}

/// Create a temporary test-case file
pub fn write_testcases(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// One record whose stub invocation reports `reported` while `expected` is recorded
pub fn record(args: &str, reported: &str, expected: &str) -> String {
    format!("{} --stub-hash {}\nfoo.czi\n.\n{}\n", args, reported, expected)
}

/// Harness command for the given test-case file.
///
/// The stub is selected through `CZICMD_EXECUTABLE`, so an explicit `-c`
/// replaces it.
pub fn harness(testcases: &NamedTempFile) -> assert_cmd::Command {
    #[allow(deprecated)]
    let mut cmd = assert_cmd::Command::cargo_bin("czicmd-regress").unwrap();
    cmd.env("CZICMD_EXECUTABLE", stub_bin())
        .env_remove("CZICMD_TESTCASES")
        .env_remove("CZICMD_REGRESS_CAPTURE")
        .env_remove("RUST_LOG")
        .arg("-t")
        .arg(testcases.path());
    cmd
}
