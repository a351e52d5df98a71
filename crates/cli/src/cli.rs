// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments of the harness.

use std::path::PathBuf;

use clap::Parser;

use crate::invocation::DEFAULT_STREAM_CLASS;
use crate::verbosity::Verbosity;

/// CZIcmd regression harness
#[derive(Parser, Clone, Debug)]
#[command(
    name = "czicmd-regress",
    version,
    about = "Replay CZIcmd test cases and compare the reported result hashes"
)]
pub struct Cli {
    /// Path to the CZIcmd executable under test
    #[arg(
        short = 'c',
        long = "czicmd-executable",
        env = "CZICMD_EXECUTABLE",
        default_value = "CZIcmd"
    )]
    pub czicmd_executable: PathBuf,

    /// Test-case file (4-line records: args, input, output, hash)
    #[arg(
        short = 't',
        long,
        env = "CZICMD_TESTCASES",
        default_value = "testcases.txt"
    )]
    pub testcases: PathBuf,

    /// Verbosity: 0-3 or none, normal, chatty, debug
    #[arg(short = 'v', long, default_value_t = Verbosity::Normal)]
    pub verbosity: Verbosity,

    /// Stream class passed to CZIcmd for reading the source
    #[arg(long, default_value = DEFAULT_STREAM_CLASS)]
    pub source_stream_class: String,

    /// Kill a test case's CZIcmd process after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Fail before running anything if the last record is incomplete
    #[arg(long)]
    pub strict: bool,

    /// Write one JSON line per test case to this file
    #[arg(long, env = "CZICMD_REGRESS_CAPTURE")]
    pub capture: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
