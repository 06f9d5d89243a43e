//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_INPUT_PATH, DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_NETWORK_IDLE_MS,
    DEFAULT_PAC_PROXY, DEFAULT_TEMPLATE_PATH,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "domain_crawler",
    about = "Collects every hostname a list of pages requests and writes domain lists and a proxy PAC file",
    version,
    disable_version_flag = true
)]
pub struct Opt {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Input data file: one URL or hostname per line
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Directory the output files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Mustache template for the proxy PAC output
    #[arg(long, default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// Proxy directive rendered into the PAC output
    #[arg(long, default_value = DEFAULT_PAC_PROXY)]
    pub proxy: String,

    /// Chrome/Chromium executable (defaults to the usual install location)
    #[arg(long, env = "CHROME_PATH")]
    pub chrome_path: Option<PathBuf>,

    /// Per-page navigation timeout in seconds
    #[arg(long, default_value_t = DEFAULT_NAVIGATION_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Milliseconds without new requests after which a page counts as loaded
    #[arg(long, default_value_t = DEFAULT_NETWORK_IDLE_MS)]
    pub idle_ms: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use domain_crawler::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("sites.txt"),
///     output_dir: PathBuf::from("out"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read URLs from
    pub input: PathBuf,

    /// Directory for the output files
    pub output_dir: PathBuf,

    /// PAC template path (a built-in template is used if it does not exist)
    pub template: PathBuf,

    /// Proxy directive for the PAC output
    pub proxy: String,

    /// Explicit Chrome executable
    pub chrome_path: Option<PathBuf>,

    /// Per-page navigation timeout in seconds
    pub timeout_seconds: u64,

    /// Network idle window in milliseconds
    pub idle_ms: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Per-page navigation timeout.
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Network idle window.
    pub fn idle_window(&self) -> Duration {
        Duration::from_millis(self.idle_ms)
    }

    /// Name used in output file names: the input file name without extension.
    pub fn input_stem(&self) -> String {
        self.input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from("."),
            template: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            proxy: DEFAULT_PAC_PROXY.to_string(),
            chrome_path: None,
            timeout_seconds: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            idle_ms: DEFAULT_NETWORK_IDLE_MS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            output_dir: opt.output_dir,
            template: opt.template,
            proxy: opt.proxy,
            chrome_path: opt.chrome_path,
            timeout_seconds: opt.timeout_seconds,
            idle_ms: opt.idle_ms,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
