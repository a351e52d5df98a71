// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration.
//!
//! A `HarnessConfig` is built once (from the command line, or directly in
//! tests) and handed to the controller. Nothing here is process-global.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::invocation::DEFAULT_STREAM_CLASS;
use crate::verbosity::Verbosity;

/// Everything a harness run needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// CZIcmd executable; a bare name is resolved through `PATH`
    pub executable: PathBuf,
    /// Test-case file
    pub testcases: PathBuf,
    pub verbosity: Verbosity,
    /// Value for `--source-stream-class`
    pub stream_class: String,
    /// Per-case timeout; `None` waits forever
    pub timeout: Option<Duration>,
    /// Treat an incomplete trailing record as fatal
    pub strict: bool,
    /// JSONL capture file
    pub capture: Option<PathBuf>,
}

impl HarnessConfig {
    pub fn new(executable: impl Into<PathBuf>, testcases: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            testcases: testcases.into(),
            verbosity: Verbosity::default(),
            stream_class: DEFAULT_STREAM_CLASS.to_string(),
            timeout: None,
            strict: false,
            capture: None,
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_stream_class(mut self, stream_class: impl Into<String>) -> Self {
        self.stream_class = stream_class.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_capture(mut self, capture: Option<PathBuf>) -> Self {
        self.capture = capture;
        self
    }
}

impl From<&Cli> for HarnessConfig {
    fn from(cli: &Cli) -> Self {
        HarnessConfig::new(&cli.czicmd_executable, &cli.testcases)
            .with_verbosity(cli.verbosity)
            .with_stream_class(&cli.source_stream_class)
            .with_timeout(cli.timeout_secs.map(Duration::from_secs))
            .with_strict(cli.strict)
            .with_capture(cli.capture.clone())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
