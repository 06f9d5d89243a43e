//! The sequential page-visiting loop.

use log::{debug, warn};

use crate::app::{extract_hostname, UrlSpinner};
use crate::browser::PageVisitor;
use crate::error_handling::{ErrorType, ProcessingStats};

/// Everything observed while visiting the URL list.
#[derive(Debug, Default)]
pub struct CrawlLoopResult {
    /// Every hostname seen, in observation order, with duplicates.
    pub hostnames: Vec<String>,
    /// URLs whose page finished loading.
    pub successful: usize,
    /// URLs that were invalid or whose page failed to load.
    pub failed: usize,
    /// Failure counts per category.
    pub stats: ProcessingStats,
}

impl CrawlLoopResult {
    fn record_failure(&mut self, kind: ErrorType) {
        self.failed += 1;
        self.stats.increment_error(kind);
    }
}

/// Visits each URL in turn, collecting the hostnames every page requests.
///
/// The hostname of the requested URL itself is recorded before navigating, so
/// it is kept even when the page fails to load. URLs without a usable host are
/// counted as failures and not visited.
pub async fn crawl_urls<V>(visitor: &mut V, urls: &[String]) -> CrawlLoopResult
where
    V: PageVisitor + ?Sized,
{
    let mut result = CrawlLoopResult::default();
    let total = urls.len();

    for (index, url) in urls.iter().enumerate() {
        let spinner = UrlSpinner::start(index + 1, total, url);

        let Some(hostname) = extract_hostname(url) else {
            result.record_failure(ErrorType::InvalidUrl);
            spinner.fail();
            continue;
        };
        result.hostnames.push(hostname);

        let report = visitor.visit(url).await;
        debug!("{} requested {} hostnames", url, report.hostnames.len());
        result.hostnames.extend(report.hostnames);

        match report.failure {
            None => {
                result.successful += 1;
                spinner.succeed();
            }
            Some(failure) => {
                warn!("Error occurred on open page {}: {}", url, failure.message);
                result.record_failure(failure.kind);
                spinner.fail();
            }
        }
    }

    result
}
