// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hash extraction and comparison.

use std::sync::LazyLock;

use regex::Regex;

/// Line CZIcmd prints for `--calc-hash`: the prefix at the start of a line,
/// exactly 32 hex digits, and nothing hex-like directly after them.
static HASH_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: constant pattern
    #[allow(clippy::expect_used)]
    Regex::new(r"(?m)^hash of result: ([0-9a-fA-F]{32})(?:[^0-9a-fA-F]|$)")
        .expect("hash line regex is invalid")
});

/// Result of checking one case's output.
///
/// Hashes are stored upper-cased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass { observed: String },
    Mismatch { observed: String, expected: String },
    /// No line carried a hash at all
    MalformedOutput { expected: String },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass { .. })
    }

    pub fn observed(&self) -> Option<&str> {
        match self {
            Verdict::Pass { observed } | Verdict::Mismatch { observed, .. } => {
                Some(observed.as_str())
            }
            Verdict::MalformedOutput { .. } => None,
        }
    }
}

/// First hash token reported in `stdout`, as printed.
pub fn extract_hash(stdout: &str) -> Option<&str> {
    HASH_LINE_REGEX
        .captures(stdout)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Compare the reported hash against `expected`, ignoring letter case.
pub fn check(stdout: &str, expected: &str) -> Verdict {
    let expected = expected.trim().to_ascii_uppercase();
    match extract_hash(stdout) {
        Some(token) => {
            let observed = token.to_ascii_uppercase();
            if observed == expected {
                Verdict::Pass { observed }
            } else {
                Verdict::Mismatch { observed, expected }
            }
        }
        None => Verdict::MalformedOutput { expected },
    }
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
