// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Building CZIcmd argument vectors from test cases.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::testcase::TestCase;

/// Stream class CZIcmd uses to read `--source` unless overridden.
pub const DEFAULT_STREAM_CLASS: &str = "curl_http_inputstream";

/// A concrete process invocation: program plus arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Turns test cases into CZIcmd invocations.
///
/// The harness always appends the source, stream class, output and
/// `--calc-hash` flags itself, so test-case files only carry the
/// operation-specific arguments.
#[derive(Clone, Debug)]
pub struct InvocationBuilder {
    executable: PathBuf,
    stream_class: String,
}

impl InvocationBuilder {
    pub fn new(executable: impl Into<PathBuf>, stream_class: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            stream_class: stream_class.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn build(&self, case: &TestCase) -> Invocation {
        let mut args: Vec<String> = case
            .arguments
            .split_whitespace()
            .map(str::to_string)
            .collect();
        args.extend([
            "--source".to_string(),
            case.input_source.clone(),
            "--source-stream-class".to_string(),
            self.stream_class.clone(),
            "--output".to_string(),
            case.output_destination.clone(),
            "--calc-hash".to_string(),
        ]);

        Invocation {
            program: self.executable.clone(),
            args,
        }
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
