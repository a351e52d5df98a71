// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output on stderr, kept apart from the per-case report on stdout.
//!
//! Messages are coloured only when stderr is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Severity of a diagnostic line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    fn ansi_color(self) -> &'static str {
        match self {
            Severity::Error => "\x1b[31m",
            Severity::Warning => "\x1b[33m",
        }
    }
}

/// Print an error message to stderr (red on a terminal).
pub fn print_error(msg: impl Display) {
    print_diagnostic(Severity::Error, msg);
}

/// Print a warning message to stderr (yellow on a terminal).
pub fn print_warning(msg: impl Display) {
    print_diagnostic(Severity::Warning, msg);
}

fn print_diagnostic(severity: Severity, msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), severity, msg, is_tty);
}

/// Write a diagnostic to a writer with explicit terminal flag.
fn write_diagnostic<W: Write>(
    writer: &mut W,
    severity: Severity,
    msg: impl Display,
    is_terminal: bool,
) {
    // Nothing sensible to do if stderr itself is gone
    let _ = if is_terminal {
        writeln!(
            writer,
            "{}{}: {}\x1b[0m",
            severity.ansi_color(),
            severity.label(),
            msg
        )
    } else {
        writeln!(writer, "{}: {}", severity.label(), msg)
    };
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
