// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured case data types.

use super::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One replayed test case.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseRecord {
    /// 1-based case number in fixture order
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Time spent on the case, launch to verdict
    #[serde(rename = "elapsed_ms", with = "duration_serde")]
    pub elapsed: Duration,

    /// Full argument vector, program first
    pub argv: Vec<String>,

    pub outcome: CaseOutcome,
}

/// Outcome of a single case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CaseOutcome {
    Passed {
        hash: String,
    },
    Mismatch {
        observed: String,
        expected: String,
    },
    MalformedOutput {
        expected: String,
    },
    LaunchFailure {
        message: String,
    },
}

impl CaseOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Passed { .. })
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
