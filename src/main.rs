//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_crawler` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_crawler::initialization::init_logger_with;
use domain_crawler::{run_crawl, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_crawl(config).await {
        Ok(report) => {
            println!(
                "✅ Processed {} URL{} ({} succeeded, {} failed) in {:.1}s - {} unique hostnames, {} shortened domains",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds,
                report.unique_hostnames,
                report.shortened_domains
            );
            for path in &report.output_files {
                println!("Wrote {}", path.display());
            }
            if report.failed_outputs > 0 {
                eprintln!(
                    "domain_crawler: {} output file{} could not be written",
                    report.failed_outputs,
                    if report.failed_outputs == 1 { "" } else { "s" }
                );
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_crawler error: {:#}", e);
            process::exit(1);
        }
    }
}
