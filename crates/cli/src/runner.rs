// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Launching the tool under test.
//!
//! The `ProcessRunner` trait is the seam between the controller and real
//! processes; tests substitute scripted runners.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

use crate::invocation::Invocation;

/// What a finished process left behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Standard output, decoded lossily as UTF-8
    pub stdout: String,
    /// Exit code; `None` if the process was killed by a signal.
    /// Informational only, verification looks at `stdout`.
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    pub fn from_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            exit_code: Some(0),
        }
    }
}

/// Errors that keep a case from producing output
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to launch '{}': {source}", .program.display())]
    LaunchFailure {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' did not finish within {:?}", .program.display(), .after)]
    Timeout { program: PathBuf, after: Duration },
}

/// Boxed future returned by [`ProcessRunner::run`].
pub type RunFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CapturedOutput, RunError>> + Send + 'a>>;

/// Runs one invocation to completion.
pub trait ProcessRunner: Send + Sync {
    fn run<'a>(&'a self, invocation: &'a Invocation) -> RunFuture<'a>;
}

/// Runner that spawns real child processes.
#[derive(Clone, Debug, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Kill the child and fail the case after `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run_child(&self, invocation: &Invocation) -> Result<CapturedOutput, RunError> {
        let launch_failure = |source| RunError::LaunchFailure {
            program: invocation.program.clone(),
            source,
        };

        // stderr stays attached to the terminal so tool diagnostics remain visible
        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(launch_failure)?;
        tracing::debug!(pid = ?child.id(), program = %invocation.program.display(), "spawned");

        let output = match self.timeout {
            Some(after) => match tokio::time::timeout(after, child.wait_with_output()).await {
                Ok(result) => result.map_err(launch_failure)?,
                // Dropping the wait future drops the child, which kills it
                Err(_) => {
                    return Err(RunError::Timeout {
                        program: invocation.program.clone(),
                        after,
                    })
                }
            },
            None => child.wait_with_output().await.map_err(launch_failure)?,
        };
        tracing::debug!(
            exit_code = ?output.status.code(),
            stdout_len = output.stdout.len(),
            "child exited"
        );

        Ok(CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

impl ProcessRunner for SystemRunner {
    fn run<'a>(&'a self, invocation: &'a Invocation) -> RunFuture<'a> {
        Box::pin(self.run_child(invocation))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
