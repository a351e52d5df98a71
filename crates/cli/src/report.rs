// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-case and summary report lines.
//!
//! The report goes to stdout. What is printed depends on the verbosity;
//! verdicts never do.

use std::io::{self, Write};
use std::path::Path;

use crate::harness::{CaseResult, RunSummary};
use crate::invocation::Invocation;
use crate::runner::RunError;
use crate::verbosity::Verbosity;
use crate::verify::Verdict;

/// Status line for case `index` (1-based).
pub fn status_line(index: usize, passed: bool) -> String {
    if passed {
        format!("Testcase #{}: ** OK **", index)
    } else {
        format!("Testcase #{}: ** FAILURE **", index)
    }
}

/// Why a case failed; `None` for a passing case.
pub fn failure_detail(outcome: &Result<Verdict, RunError>) -> Option<String> {
    match outcome {
        Ok(Verdict::Pass { .. }) => None,
        Ok(Verdict::Mismatch { observed, expected }) => {
            Some(format!("is:{} expected:{}", observed, expected))
        }
        Ok(Verdict::MalformedOutput { expected }) => {
            Some(format!("no hash line in output, expected:{}", expected))
        }
        Err(e) => Some(e.to_string()),
    }
}

/// Closing line of a run.
pub fn summary_line(summary: &RunSummary) -> String {
    if summary.all_passed() {
        "All tests passed.".to_string()
    } else {
        format!("There were {} error(s).", summary.failed)
    }
}

/// Writes report lines at a given verbosity.
pub struct Reporter<W: Write> {
    out: W,
    verbosity: Verbosity,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, verbosity: Verbosity) -> Self {
        Self { out, verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Announce the run (chatty and up).
    pub fn header(&mut self, count: usize, source: &Path) -> io::Result<()> {
        if self.verbosity.shows_progress() {
            writeln!(
                self.out,
                "Running {} test case(s) from {}",
                count,
                source.display()
            )?;
        }
        Ok(())
    }

    /// Echo the argument vector before launch (debug only).
    pub fn invocation(&mut self, invocation: &Invocation) -> io::Result<()> {
        if self.verbosity.shows_debug() {
            writeln!(self.out, "{:?}", invocation.argv())?;
        }
        Ok(())
    }

    pub fn case(&mut self, result: &CaseResult) -> io::Result<()> {
        let passed = result.passed();
        if !passed && self.verbosity.shows_detail() {
            if let Some(detail) = failure_detail(&result.outcome) {
                writeln!(self.out, "{}", detail)?;
            }
        }
        if !passed && self.verbosity.shows_debug() {
            if let Some(ref stdout) = result.stdout {
                for line in stdout.lines() {
                    writeln!(self.out, "  | {}", line)?;
                }
            }
        }
        writeln!(self.out, "{}", status_line(result.index, passed))?;
        if self.verbosity.shows_progress() {
            writeln!(self.out, "  took {} ms", result.elapsed.as_millis())?;
        }
        Ok(())
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out, "{}", summary_line(summary))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
