//! Configuration constants.
//!
//! This module defines the defaults and limits used throughout the application.

use std::time::Duration;

/// Input file read when `--input` is not given.
pub const DEFAULT_INPUT_PATH: &str = "./data.txt";
/// Mustache template for the proxy auto-config output.
pub const DEFAULT_TEMPLATE_PATH: &str = "./proxy.pac.mustache";
/// Proxy directive substituted for `{{proxy}}` in the PAC template.
pub const DEFAULT_PAC_PROXY: &str = "PROXY 127.0.0.1:3128";

/// Per-page navigation timeout in seconds (puppeteer's default is 30s).
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;
/// A page counts as settled once no request has started for this long
/// (the `networkidle0` heuristic).
pub const DEFAULT_NETWORK_IDLE_MS: u64 = 500;

/// Maximum URL length (2048 characters); longer input lines are skipped.
pub const MAX_URL_LENGTH: usize = 2048;

/// Grace period for Chrome to exit after `Browser.close`.
pub const BROWSER_CLOSE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default Chrome install location on Linux.
pub const LINUX_CHROME_PATH: &str = "/usr/bin/google-chrome";
/// Default Chrome install location on macOS.
pub const MACOS_CHROME_PATH: &str =
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";
/// Chrome location on Windows, relative to `%PROGRAMFILES(X86)%` (x64) or
/// `%PROGRAMFILES%`.
pub const WINDOWS_CHROME_SUBPATH: &str = "Google/Chrome/Application/chrome.exe";
