// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CZIcmd regression harness
//!
//! Replays a catalogue of CZIcmd invocations and compares the content hash
//! each one reports (`--calc-hash`) against a recorded value. A test-case
//! file lists one scenario per four non-comment lines: the operation
//! arguments, the source, the output destination and the expected hash.
//!
//! ```no_run
//! use czicmd_regress::config::HarnessConfig;
//! use czicmd_regress::harness;
//!
//! # async fn example() -> Result<(), czicmd_regress::harness::HarnessError> {
//! let config = HarnessConfig::new("CZIcmd", "testcases.txt");
//! let summary = harness::run(config).await?;
//! std::process::exit(summary.exit_code());
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod exit;
pub mod harness;
pub mod invocation;
pub mod output_diagnostic;
pub mod report;
pub mod runner;
pub mod testcase;
pub mod verbosity;
pub mod verify;

/// Re-exported capture types from the czicmd-regress-capture crate.
pub mod capture {
    pub use czicmd_regress_capture::{CaptureLog, CaseOutcome, CaseRecord};
}
