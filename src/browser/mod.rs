//! Headless browser driving.
//!
//! The crawl loop talks to the browser through the [`PageVisitor`] trait so it
//! can run against a real Chrome ([`ChromeVisitor`]) or a scripted fake.

mod chrome;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::{LINUX_CHROME_PATH, MACOS_CHROME_PATH, WINDOWS_CHROME_SUBPATH};
use crate::error_handling::ErrorType;

pub use chrome::ChromeVisitor;

/// Why a single page visit failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitFailure {
    /// Failure category.
    pub kind: ErrorType,
    /// Error message from the browser.
    pub message: String,
}

/// What one page visit observed.
///
/// Hostnames seen before a failure are kept: a page that times out has
/// usually already requested most of its resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitReport {
    /// Hostnames of every request the page made, in request order.
    pub hostnames: Vec<String>,
    /// Set if navigation did not complete.
    pub failure: Option<VisitFailure>,
}

impl VisitReport {
    /// A report for a visit that failed before any request was observed.
    pub fn failed(kind: ErrorType, message: impl Into<String>) -> Self {
        Self {
            hostnames: Vec::new(),
            failure: Some(VisitFailure {
                kind,
                message: message.into(),
            }),
        }
    }

    /// Whether navigation completed.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Something that can load pages one at a time and report the hostnames they
/// request.
#[async_trait]
pub trait PageVisitor: Send {
    /// Loads `url` and waits for it to settle.
    async fn visit(&mut self, url: &str) -> VisitReport;

    /// Shuts the browser down. Called once after the last visit.
    async fn close(&mut self) -> anyhow::Result<()>;
}

/// Returns the hostname of a request URL, if it has one.
///
/// `data:`, `blob:` and `about:` URLs have no host and are ignored.
pub fn request_hostname(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .filter(|host| !host.is_empty())
}

/// The usual Chrome install location for the current platform.
///
/// Returns `None` on platforms without a known location, or on Windows when
/// the program files variable is unset.
pub fn default_chrome_path() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        // Chrome installs as a 32-bit application, so on x64 it lives under the x86 folder
        let program_files = if cfg!(target_arch = "x86_64") {
            "PROGRAMFILES(X86)"
        } else {
            "PROGRAMFILES"
        };
        std::env::var_os(program_files)
            .map(|dir| PathBuf::from(dir).join(WINDOWS_CHROME_SUBPATH))
    } else if cfg!(target_os = "linux") {
        Some(PathBuf::from(LINUX_CHROME_PATH))
    } else if cfg!(target_os = "macos") {
        Some(PathBuf::from(MACOS_CHROME_PATH))
    } else {
        None
    }
}

/// Picks the Chrome executable to launch.
///
/// An explicit path always wins. Otherwise the platform default is used if it
/// exists; `None` leaves the lookup to chromiumoxide.
pub fn resolve_chrome_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    default_chrome_path().filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_hostname() {
        assert_eq!(
            request_hostname("https://fonts.gstatic.com/s/roboto.woff2"),
            Some("fonts.gstatic.com".to_string())
        );
        assert_eq!(
            request_hostname("http://10.0.0.1:8080/api"),
            Some("10.0.0.1".to_string())
        );
    }

    #[test]
    fn test_request_hostname_without_host() {
        assert_eq!(request_hostname("data:image/png;base64,AAAA"), None);
        assert_eq!(request_hostname("about:blank"), None);
        assert_eq!(request_hostname("blob:https://example.com/uuid"), None);
    }

    #[test]
    fn test_resolve_chrome_path_explicit_wins() {
        let explicit = Path::new("/opt/chromium/chrome");
        assert_eq!(
            resolve_chrome_path(Some(explicit)),
            Some(PathBuf::from("/opt/chromium/chrome"))
        );
    }

    #[test]
    fn test_resolve_chrome_path_requires_existing_default() {
        if let Some(path) = resolve_chrome_path(None) {
            assert!(path.exists());
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_default_chrome_path_linux() {
        assert_eq!(
            default_chrome_path(),
            Some(PathBuf::from("/usr/bin/google-chrome"))
        );
    }

    #[test]
    fn test_visit_report_failed() {
        let report =
            VisitReport::failed(ErrorType::NavigationFailed, "net::ERR_NAME_NOT_RESOLVED");
        assert!(!report.is_success());
        assert!(report.hostnames.is_empty());
        assert_eq!(report.failure.unwrap().kind, ErrorType::NavigationFailed);
        assert!(VisitReport::default().is_success());
    }
}
