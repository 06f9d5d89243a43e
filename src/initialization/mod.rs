//! Application initialization.
//!
//! This module provides the logger setup used by the binary. The headless
//! browser is launched by the crawl itself (see `browser::ChromeVisitor`).

mod logger;

// Re-export public API
pub use logger::init_logger_with;
