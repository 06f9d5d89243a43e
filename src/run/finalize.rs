//! Crawl finalization: dedup, normalization and output writing.

use std::time::Instant;

use log::info;

use crate::app::{print_error_statistics, print_simple_summary};
use crate::config::Config;
use crate::domain::{normalize, unique_sorted};
use crate::output::{write_outputs, OutputPlan};

use super::task::CrawlLoopResult;
use super::CrawlReport;

/// Turns the raw observations into the output files and the final report.
///
/// Output write failures are logged and counted in the report; they do not
/// make the crawl fail.
pub async fn finalize_crawl(
    config: &Config,
    loop_result: CrawlLoopResult,
    start_time: Instant,
) -> CrawlReport {
    let CrawlLoopResult {
        hostnames,
        successful,
        failed,
        stats,
    } = loop_result;

    info!("got {} domains", hostnames.len());
    let hostnames = unique_sorted(hostnames);
    info!("got unique {} domains", hostnames.len());
    let domains = normalize(&hostnames);
    info!("got unique sorted {} shortened domains", domains.len());

    let stem = config.input_stem();
    let plan = OutputPlan {
        dir: &config.output_dir,
        stem: &stem,
        hostnames: &hostnames,
        domains: &domains,
        pac_template: &config.template,
        proxy: &config.proxy,
    };
    let outputs = write_outputs(&plan).await;

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    print_error_statistics(&stats);
    print_simple_summary(successful + failed, successful, failed, elapsed_seconds);

    CrawlReport {
        total_urls: successful + failed,
        successful,
        failed,
        unique_hostnames: hostnames.len(),
        shortened_domains: domains.len(),
        output_files: outputs.written,
        failed_outputs: outputs.failed.len(),
        elapsed_seconds,
    }
}
