// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture log implementation.

use crate::record::{CaseOutcome, CaseRecord};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Capture log for recording case outcomes
pub struct CaptureLog {
    records: Arc<Mutex<Vec<CaseRecord>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl CaptureLog {
    /// Create a new in-memory capture log
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a capture log that also writes to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record the outcome of case `seq`.
    ///
    /// The in-memory record always succeeds; an error means the JSONL mirror
    /// could not be written.
    pub fn record(
        &self,
        seq: u64,
        argv: Vec<String>,
        elapsed: Duration,
        outcome: CaseOutcome,
    ) -> std::io::Result<()> {
        let record = CaseRecord {
            seq,
            timestamp: SystemTime::now(),
            elapsed,
            argv,
            outcome,
        };

        self.records.lock().push(record.clone());

        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            let json = serde_json::to_string(&record)?;
            writeln!(w, "{}", json)?;
            w.flush()?;
        }
        Ok(())
    }

    /// Get all captured records
    pub fn records(&self) -> Vec<CaseRecord> {
        self.records.lock().clone()
    }

    /// Records whose outcome is a failure of any kind
    pub fn failures(&self) -> Vec<CaseRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| !r.outcome.is_pass())
            .cloned()
            .collect()
    }

    /// Records whose outcome is a pass
    pub fn passes(&self) -> Vec<CaseRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.outcome.is_pass())
            .cloned()
            .collect()
    }

    /// Count records matching a predicate
    pub fn count<F: Fn(&CaseRecord) -> bool>(&self, pred: F) -> usize {
        self.records.lock().iter().filter(|r| pred(r)).count()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CaptureLog {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
