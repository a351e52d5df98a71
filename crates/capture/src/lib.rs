// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-case outcome capture for czicmd-regress runs.
//!
//! Every replayed test case is recorded as a [`CaseRecord`]. Records are kept
//! in memory and can be mirrored to a JSONL file so that a run can be
//! inspected after the fact.

mod duration_serde;
mod log;
mod record;

pub use log::CaptureLog;
pub use record::{CaseOutcome, CaseRecord};
