// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-case file loading.
//!
//! A test-case file is plain text. Blank lines and lines starting with `#`
//! are ignored; every other line belongs to a four-line record:
//!
//! ```text
//! # args / input / output / expected hash
//! -c ChannelComposition --plane-coordinate C0
//! https://example.org/data/sample.czi
//! /tmp/out
//! 3F2504E04F8911D39A0C0305E82C3301
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// One scenario to replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// Tool-specific flags, split on whitespace when the invocation is built
    pub arguments: String,
    /// Input path or URL, passed as `--source`
    pub input_source: String,
    /// Output path, passed as `--output`
    pub output_destination: String,
    /// Recorded content hash (32 hex digits, any case)
    pub expected_hash: String,
    /// Line number of the record's first line
    pub line: usize,
}

/// Which field of a record the next surviving line fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Arguments,
    Input,
    Output,
    Hash,
}

impl Phase {
    fn next(self) -> Phase {
        match self {
            Phase::Arguments => Phase::Input,
            Phase::Input => Phase::Output,
            Phase::Output => Phase::Hash,
            Phase::Hash => Phase::Arguments,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Arguments => "arguments",
            Phase::Input => "input source",
            Phase::Output => "output destination",
            Phase::Hash => "expected hash",
        };
        f.write_str(name)
    }
}

/// A trailing record that ran out of lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncompleteRecord {
    /// Line number of the record's first line
    pub line: usize,
    /// First field that never got a line
    pub missing: Phase,
}

/// Errors that can occur when loading test cases
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read test cases from '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "incomplete test case in '{}' starting at line {}: missing {}",
        .path.display(),
        .record.line,
        .record.missing
    )]
    IncompleteRecord {
        path: PathBuf,
        record: IncompleteRecord,
    },
}

/// Parsed test-case file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fixture {
    /// Complete records in file order
    pub cases: Vec<TestCase>,
    /// Dangling record at the end of the file, never part of `cases`
    pub incomplete: Option<IncompleteRecord>,
}

impl Fixture {
    /// Reject a fixture with a dangling record.
    pub fn require_complete(self, path: &Path) -> Result<Vec<TestCase>, StoreError> {
        match self.incomplete {
            Some(record) => Err(StoreError::IncompleteRecord {
                path: path.to_path_buf(),
                record,
            }),
            None => Ok(self.cases),
        }
    }
}

/// Fields collected so far for the record being parsed.
#[derive(Default)]
struct PendingRecord {
    line: usize,
    arguments: String,
    input_source: String,
    output_destination: String,
}

impl PendingRecord {
    fn complete(self, expected_hash: &str) -> TestCase {
        TestCase {
            arguments: self.arguments,
            input_source: self.input_source,
            output_destination: self.output_destination,
            expected_hash: expected_hash.to_string(),
            line: self.line,
        }
    }
}

/// Read and parse a test-case file.
pub fn load(path: &Path) -> Result<Fixture, StoreError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| StoreError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    let fixture = parse(&content);
    tracing::debug!(
        path = %path.display(),
        cases = fixture.cases.len(),
        incomplete = fixture.incomplete.is_some(),
        "loaded test cases"
    );
    Ok(fixture)
}

/// Parse test-case text into records.
///
/// Fields are taken verbatim after trimming; nothing is validated here.
/// A leading byte-order mark is ignored.
pub fn parse(source: &str) -> Fixture {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut cases = Vec::new();
    let mut phase = Phase::Arguments;
    let mut pending = PendingRecord::default();

    for (lineno, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match phase {
            Phase::Arguments => {
                pending = PendingRecord {
                    line: lineno + 1,
                    arguments: line.to_string(),
                    ..PendingRecord::default()
                };
            }
            Phase::Input => pending.input_source = line.to_string(),
            Phase::Output => pending.output_destination = line.to_string(),
            Phase::Hash => cases.push(std::mem::take(&mut pending).complete(line)),
        }
        phase = phase.next();
    }

    let incomplete = (phase != Phase::Arguments).then_some(IncompleteRecord {
        line: pending.line,
        missing: phase,
    });

    Fixture { cases, incomplete }
}

#[cfg(test)]
#[path = "testcase_tests.rs"]
mod tests;
