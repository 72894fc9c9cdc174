//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `weblog_stats` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use weblog_stats::initialization::init_logger_with;
use weblog_stats::{describe_failure, run_report, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config (missing --url exits with a usage error)
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_report(&config).await {
        Ok(report) => {
            for line in &report.lines {
                println!("{}", line);
            }
            Ok(())
        }
        Err(e) => {
            log::debug!("Run failed: {:#}", e);
            let failure = describe_failure(&e);
            println!("{}", failure.message);
            process::exit(failure.code);
        }
    }
}
