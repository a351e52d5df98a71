// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes of the harness.

/// Exit codes of `czicmd-regress`
pub mod exit_codes {
    /// Every test case passed
    pub const SUCCESS: i32 = 0;
    /// At least one test case failed, or the run could not start
    pub const FAILURE: i32 = 1;
    /// Invalid command line (reported by clap)
    pub const USAGE: i32 = 2;
}
