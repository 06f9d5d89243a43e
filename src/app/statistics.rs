//! End-of-run statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Prints per-category failure counts to the log.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Error Counts ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}

/// Prints the one-line summary of a run.
pub fn print_simple_summary(
    total_urls: usize,
    successful_urls: usize,
    failed_urls: usize,
    elapsed_seconds: f64,
) {
    info!(
        "✅ Processed {} URL{} ({} succeeded, {} failed) in {:.1}s",
        total_urls,
        if total_urls == 1 { "" } else { "s" },
        successful_urls,
        failed_urls,
        elapsed_seconds
    );
}
