// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stand-in for CZIcmd used by the harness integration tests.
//!
//! Accepts any arguments. With `--calc-hash` it prints
//! `hash of result: <hash>`, where the hash is the value of `--stub-hash`
//! or, without one, the first 16 bytes of SHA-256 over the `--source` value.
//!
//! Stub-only flags:
//! - `--stub-hash <hex>`: report this hash
//! - `--stub-silent`: print no hash line
//! - `--stub-exit <code>`: exit with this code after printing

use clap::Parser;
use sha2::{Digest, Sha256};

#[derive(Parser, Debug)]
#[command(name = "czicmd-stub", about = "CZIcmd stand-in for harness tests")]
struct StubCli {
    /// Input the harness passes through
    #[arg(long)]
    source: Option<String>,

    /// Print the result hash line
    #[arg(long)]
    calc_hash: bool,

    /// Hash to report instead of the source digest
    #[arg(long)]
    stub_hash: Option<String>,

    /// Print no hash line even with --calc-hash
    #[arg(long)]
    stub_silent: bool,

    /// Exit code after printing
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    stub_exit: i32,
}

/// Flags the stub reads, and whether each takes a value.
const KNOWN_FLAGS: &[(&str, bool)] = &[
    ("--source", true),
    ("--calc-hash", false),
    ("--stub-hash", true),
    ("--stub-silent", false),
    ("--stub-exit", true),
];

/// Keep the stub's own flags (and their values), drop every other CZIcmd
/// argument so clap only sees what it knows about.
fn known_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut kept = vec!["czicmd-stub".to_string()];
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let Some(&(_, takes_value)) = KNOWN_FLAGS.iter().find(|(flag, _)| *flag == arg) else {
            continue;
        };
        kept.push(arg);
        if takes_value {
            kept.extend(args.next());
        }
    }
    kept
}

fn source_hash(source: &str) -> String {
    let digest = Sha256::digest(source.as_bytes());
    hex::encode_upper(&digest[..16])
}

fn main() {
    let cli = StubCli::parse_from(known_args(std::env::args().skip(1)));

    println!(
        "czicmd-stub: processing {}",
        cli.source.as_deref().unwrap_or("<none>")
    );
    if cli.calc_hash && !cli.stub_silent {
        let hash = cli
            .stub_hash
            .unwrap_or_else(|| source_hash(cli.source.as_deref().unwrap_or_default()));
        println!("hash of result: {}", hash);
    }
    std::process::exit(cli.stub_exit);
}
