//! org-admin: GitHub organization administration from CI.
//!
//! This is the main entry point for the `org-admin` CLI. It parses
//! arguments, sets up diagnostics, runs the single requested action and
//! maps errors onto exit codes.

mod audit;
mod cli;
mod commands;
mod config;
mod dispatch;
mod error;
mod exit_codes;
mod fs;
mod github;
mod locks;
mod request;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the report.
/// `RUST_LOG` replaces the verbosity-derived level entirely.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
