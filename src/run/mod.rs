//! The crawl pipeline: load URLs, visit pages, write outputs.

mod finalize;
mod task;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::app::load_url_list;
use crate::browser::{ChromeVisitor, PageVisitor};
use crate::config::Config;

pub use task::{crawl_urls, CrawlLoopResult};

/// Results of a crawl.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Number of URLs in the input
    pub total_urls: usize,
    /// URLs whose page loaded
    pub successful: usize,
    /// URLs that were invalid or failed to load
    pub failed: usize,
    /// Unique hostnames observed
    pub unique_hostnames: usize,
    /// Domains left after shortening
    pub shortened_domains: usize,
    /// Output files written
    pub output_files: Vec<PathBuf>,
    /// Output files that could not be written
    pub failed_outputs: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a crawl with headless Chrome.
///
/// # Errors
///
/// Returns an error if the input file is missing or unreadable, or if Chrome
/// cannot be launched. Page load failures are not errors.
///
/// # Example
///
/// ```no_run
/// use domain_crawler::{run_crawl, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     input: PathBuf::from("data.txt"),
///     ..Default::default()
/// };
/// let report = run_crawl(config).await?;
/// println!("Found {} domains", report.shortened_domains);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlReport> {
    // Load first so a missing input fails before Chrome starts
    let urls = load_url_list(&config.input).await?;
    info!("Total URLs in file: {}", urls.len());

    let mut visitor = ChromeVisitor::launch(&config)
        .await
        .context("Failed to launch headless browser")?;
    Ok(crawl_and_finalize(&config, &urls, &mut visitor).await)
}

/// Runs a crawl with the given page visitor.
///
/// Same pipeline as [`run_crawl`] with the browser supplied by the caller.
///
/// # Errors
///
/// Returns an error if the input file is missing or unreadable.
pub async fn run_crawl_with<V>(config: &Config, visitor: &mut V) -> Result<CrawlReport>
where
    V: PageVisitor + ?Sized,
{
    let urls = load_url_list(&config.input).await?;
    info!("Total URLs in file: {}", urls.len());
    Ok(crawl_and_finalize(config, &urls, visitor).await)
}

async fn crawl_and_finalize<V>(config: &Config, urls: &[String], visitor: &mut V) -> CrawlReport
where
    V: PageVisitor + ?Sized,
{
    let start_time = Instant::now();
    let loop_result = crawl_urls(visitor, urls).await;

    if let Err(e) = visitor.close().await {
        warn!("{:#}", e);
    }

    finalize::finalize_crawl(config, loop_result, start_time).await
}
