//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed errors for initialization, input, browser and output failures
//! - Per-URL failure categories and their counters
//!
//! Only input and initialization errors are fatal. Navigation failures are
//! counted in [`ProcessingStats`] and the crawl moves on to the next URL.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{BrowserError, CrawlError, ErrorType, InitializationError, OutputError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_errors(), 0);
    }

    #[test]
    fn test_processing_stats_increment() {
        let mut stats = ProcessingStats::new();
        stats.increment_error(ErrorType::NavigationTimeout);
        stats.increment_error(ErrorType::NavigationTimeout);
        stats.increment_error(ErrorType::InvalidUrl);

        assert_eq!(stats.get_error_count(ErrorType::NavigationTimeout), 2);
        assert_eq!(stats.get_error_count(ErrorType::InvalidUrl), 1);
        assert_eq!(stats.get_error_count(ErrorType::NavigationFailed), 0);
        assert_eq!(stats.total_errors(), 3);
    }
}
