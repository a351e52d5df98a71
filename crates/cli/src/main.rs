// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CZIcmd regression harness binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use czicmd_regress::cli::Cli;
use czicmd_regress::config::HarnessConfig;
use czicmd_regress::exit::exit_codes;
use czicmd_regress::harness;
use czicmd_regress::output_diagnostic::print_error;
use czicmd_regress::verbosity::Verbosity;

/// Internal diagnostics go to stderr; `RUST_LOG` overrides the verbosity default.
fn init_tracing(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity.tracing_directive())),
        )
        .try_init();
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    let config = HarnessConfig::from(&cli);
    init_tracing(config.verbosity);

    match harness::run(config).await {
        Ok(summary) => std::process::exit(summary.exit_code()),
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}
