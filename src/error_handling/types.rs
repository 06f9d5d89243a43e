//! Error type definitions.
//!
//! This module defines the error types and failure categories used throughout
//! the application.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Fatal errors that stop a crawl before any page is visited.
#[derive(Error, Debug)]
pub enum CrawlError {
    /// The input file does not exist.
    #[error("input file not exists: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input file exists but could not be read.
    #[error("Failed to read input file {}: {source}", .path.display())]
    InputUnreadable {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Error types for headless browser operations.
#[derive(Error, Debug)]
pub enum BrowserError {
    /// The browser configuration could not be built.
    #[error("Invalid browser configuration: {0}")]
    Config(String),

    /// Chrome could not be launched.
    #[error("Failed to launch browser: {0}")]
    Launch(#[source] chromiumoxide::error::CdpError),

    /// The page used for browsing could not be created.
    #[error("Failed to open browser page: {0}")]
    Page(#[source] chromiumoxide::error::CdpError),
}

/// Error types for writing output files.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Writing an output file failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The PAC template could not be read.
    #[error("Failed to read template {}: {source}", .path.display())]
    TemplateRead {
        /// Path of the template file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The PAC template could not be compiled or rendered.
    #[error("Failed to render proxy PAC template: {0}")]
    Template(#[from] mustache::Error),
}

/// Categories of per-URL failures.
///
/// None of these abort a crawl; they are counted and summarized at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Input line that is not a parseable http(s) URL with a host.
    InvalidUrl,
    /// Navigation did not finish before the timeout.
    NavigationTimeout,
    /// Navigation failed (DNS, connection refused, TLS, ...).
    NavigationFailed,
    /// Event subscription on the page failed.
    PageEventError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ErrorType {
    /// Human-readable label used in the end-of-run summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::NavigationTimeout => "Navigation timeout",
            ErrorType::NavigationFailed => "Navigation failed",
            ErrorType::PageEventError => "Page event error",
        }
    }
}
