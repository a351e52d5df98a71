// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output verbosity levels.
//!
//! Levels are accepted on the command line either as a number (`0`-`3`) or
//! by name. Verbosity only changes what is printed, never a verdict.

use std::fmt;
use std::str::FromStr;

/// How much the harness prints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Per-case status lines and the summary only
    None = 0,
    /// Adds observed/expected detail for failed cases
    #[default]
    Normal = 1,
    /// Adds a run header and per-case timing
    Chatty = 2,
    /// Adds argument echo, captured output of failures and debug tracing
    Debug = 3,
}

impl Verbosity {
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Verbosity::None => "none",
            Verbosity::Normal => "normal",
            Verbosity::Chatty => "chatty",
            Verbosity::Debug => "debug",
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Verbosity::None),
            1 => Some(Verbosity::Normal),
            2 => Some(Verbosity::Chatty),
            3 => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Failure detail lines (observed vs. expected hash).
    pub fn shows_detail(self) -> bool {
        self >= Verbosity::Normal
    }

    /// Run header and per-case timing.
    pub fn shows_progress(self) -> bool {
        self >= Verbosity::Chatty
    }

    /// Argument vector echo and captured output.
    pub fn shows_debug(self) -> bool {
        self >= Verbosity::Debug
    }

    /// Default `tracing` filter directive for this level.
    pub fn tracing_directive(self) -> &'static str {
        if self.shows_debug() {
            "debug"
        } else {
            "warn"
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(level) = s.parse::<u8>() {
            return Verbosity::from_level(level)
                .ok_or_else(|| format!("verbosity level must be 0-3, got {}", level));
        }
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Verbosity::None),
            "normal" => Ok(Verbosity::Normal),
            "chatty" => Ok(Verbosity::Chatty),
            "debug" => Ok(Verbosity::Debug),
            _ => Err(format!(
                "invalid verbosity '{}': expected 0-3 or one of none, normal, chatty, debug",
                s
            )),
        }
    }
}

#[cfg(test)]
#[path = "verbosity_tests.rs"]
mod tests;
