// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration: replay every test case, count failures, report.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use czicmd_regress_capture::{CaptureLog, CaseOutcome};
use thiserror::Error;

use crate::config::HarnessConfig;
use crate::exit::exit_codes;
use crate::invocation::{Invocation, InvocationBuilder};
use crate::output_diagnostic::print_warning;
use crate::report::Reporter;
use crate::runner::{ProcessRunner, RunError, SystemRunner};
use crate::testcase::{self, StoreError, TestCase};
use crate::verify::{self, Verdict};

/// Errors that abort a whole run
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("cannot open capture file '{}': {source}", .path.display())]
    Capture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// Where the controller is in a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HarnessState {
    NotStarted,
    /// Executing the case with this 1-based index
    Running(usize),
    Completed,
}

/// Everything known about one executed case.
#[derive(Debug)]
pub struct CaseResult {
    /// 1-based position in the test-case file
    pub index: usize,
    pub invocation: Invocation,
    pub elapsed: Duration,
    /// Verification verdict, or why the tool produced no output
    pub outcome: Result<Verdict, RunError>,
    /// Captured stdout, if the tool ran
    pub stdout: Option<String>,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Ok(Verdict::Pass { .. }))
    }

    fn capture_outcome(&self) -> CaseOutcome {
        match &self.outcome {
            Ok(Verdict::Pass { observed }) => CaseOutcome::Passed {
                hash: observed.clone(),
            },
            Ok(Verdict::Mismatch { observed, expected }) => CaseOutcome::Mismatch {
                observed: observed.clone(),
                expected: expected.clone(),
            },
            Ok(Verdict::MalformedOutput { expected }) => CaseOutcome::MalformedOutput {
                expected: expected.clone(),
            },
            Err(e) => CaseOutcome::LaunchFailure {
                message: e.to_string(),
            },
        }
    }
}

/// Aggregate result of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.total - self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURE
        }
    }
}

/// Replays test cases one at a time.
pub struct HarnessController<R: ProcessRunner, W: Write> {
    config: HarnessConfig,
    builder: InvocationBuilder,
    runner: R,
    reporter: Reporter<W>,
    capture: Option<CaptureLog>,
    state: HarnessState,
    failures: usize,
}

impl<R: ProcessRunner, W: Write> HarnessController<R, W> {
    pub fn new(config: HarnessConfig, runner: R, out: W) -> Self {
        let builder = InvocationBuilder::new(&config.executable, &config.stream_class);
        let reporter = Reporter::new(out, config.verbosity);
        Self {
            config,
            builder,
            runner,
            reporter,
            capture: None,
            state: HarnessState::NotStarted,
            failures: 0,
        }
    }

    /// Record every case outcome into `log`.
    pub fn with_capture(mut self, log: CaptureLog) -> Self {
        self.capture = Some(log);
        self
    }

    pub fn state(&self) -> HarnessState {
        self.state
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Run all cases in order and print the summary.
    ///
    /// Per-case problems (launch failures, timeouts, missing or wrong hashes)
    /// are counted, never returned; only failing to write the report is.
    pub async fn run_all(&mut self, cases: &[TestCase]) -> Result<RunSummary, HarnessError> {
        self.failures = 0;
        self.reporter.header(cases.len(), &self.config.testcases)?;

        for (i, case) in cases.iter().enumerate() {
            let index = i + 1;
            self.state = HarnessState::Running(index);

            let result = self.run_case(index, case).await?;
            if !result.passed() {
                self.failures += 1;
            }
            self.reporter.case(&result)?;
            self.record(&result);
        }

        self.state = HarnessState::Completed;
        let summary = RunSummary {
            total: cases.len(),
            failed: self.failures,
        };
        self.reporter.summary(&summary)?;
        tracing::debug!(total = summary.total, failed = summary.failed, "run completed");
        Ok(summary)
    }

    async fn run_case(&mut self, index: usize, case: &TestCase) -> io::Result<CaseResult> {
        let invocation = self.builder.build(case);
        self.reporter.invocation(&invocation)?;
        tracing::debug!(index, line = case.line, "running test case");

        let started = Instant::now();
        let (outcome, stdout) = match self.runner.run(&invocation).await {
            Ok(output) => {
                let verdict = verify::check(&output.stdout, &case.expected_hash);
                (Ok(verdict), Some(output.stdout))
            }
            Err(e) => {
                tracing::debug!(index, error = %e, "tool did not run");
                (Err(e), None)
            }
        };

        Ok(CaseResult {
            index,
            invocation,
            elapsed: started.elapsed(),
            outcome,
            stdout,
        })
    }

    fn record(&self, result: &CaseResult) {
        let Some(ref log) = self.capture else {
            return;
        };
        if let Err(e) = log.record(
            result.index as u64,
            result.invocation.argv(),
            result.elapsed,
            result.capture_outcome(),
        ) {
            print_warning(format_args!("failed to write capture log: {}", e));
        }
    }

    pub fn into_output(self) -> W {
        self.reporter.into_inner()
    }
}

/// Load the configured test cases and replay them against the real tool,
/// reporting on stdout.
pub async fn run(config: HarnessConfig) -> Result<RunSummary, HarnessError> {
    let fixture = testcase::load(&config.testcases)?;
    let cases = if config.strict {
        fixture.require_complete(&config.testcases)?
    } else {
        if let Some(ref record) = fixture.incomplete {
            print_warning(format_args!(
                "ignoring incomplete test case at line {} of {} (missing {})",
                record.line,
                config.testcases.display(),
                record.missing
            ));
        }
        fixture.cases
    };

    let capture = match config.capture {
        Some(ref path) => Some(CaptureLog::with_file(path).map_err(|source| {
            HarnessError::Capture {
                path: path.clone(),
                source,
            }
        })?),
        None => None,
    };

    let runner = SystemRunner::new().with_timeout(config.timeout);
    let mut controller = HarnessController::new(config, runner, io::stdout());
    if let Some(log) = capture {
        controller = controller.with_capture(log);
    }
    controller.run_all(&cases).await
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
