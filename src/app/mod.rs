//! Main application modules.
//!
//! This module provides URL list loading, per-URL progress display, and
//! statistics printing used by the crawl pipeline.

pub mod progress;
pub mod statistics;
pub mod url;

// Re-export public API
pub use progress::UrlSpinner;
pub use statistics::{print_error_statistics, print_simple_summary};
pub use url::{extract_hostname, load_url_list, parse_url_list};
