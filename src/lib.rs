//! domain_crawler library: collect the hostnames a set of pages depends on.
//!
//! Visits every URL of an input list in a headless browser, records the
//! hostname of every request each page makes, and writes the deduplicated
//! hostnames, their shortened registrable forms, a squid-style domain list and
//! a proxy auto-config script.
//!
//! # Example
//!
//! ```no_run
//! use domain_crawler::{run_crawl, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: PathBuf::from("data.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_crawl(config).await?;
//! println!(
//!     "Visited {} URLs: {} unique hostnames, {} shortened domains",
//!     report.total_urls, report.unique_hostnames, report.shortened_domains
//! );
//! # Ok(())
//! # }
//! ```
//!
//! The shortening rules are available on their own in [`domain`]:
//!
//! ```
//! use domain_crawler::domain::normalize;
//!
//! let domains = normalize(["mail.example.com", "www.example.com", "localhost"]);
//! assert_eq!(domains, vec!["example.com".to_string()]);
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime and, for [`run_crawl`], a Chrome or
//! Chromium installation.

#![warn(missing_docs)]

mod app;
pub mod browser;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod output;
mod run;

// Re-export public API
pub use app::{extract_hostname, load_url_list, parse_url_list};
pub use browser::{PageVisitor, VisitFailure, VisitReport};
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use domain::{normalize, shorten_domain, Shortened};
pub use run::{crawl_urls, run_crawl, run_crawl_with, CrawlLoopResult, CrawlReport};
