//! URL list loading and hostname extraction.

use std::path::Path;

use log::warn;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::CrawlError;

/// Turns one input line into a URL to visit.
///
/// Trims the line, skips blank lines and `#` comments, and adds an `http://`
/// prefix when the line has no http(s) scheme. Lines longer than
/// `MAX_URL_LENGTH` are skipped with a warning.
///
/// # Returns
///
/// `Some(url)` if the line should be visited, `None` otherwise.
pub fn normalize_input_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let normalized = if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        format!("http://{trimmed}")
    } else {
        trimmed.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return None;
    }

    Some(normalized)
}

/// Parses the contents of an input file into the list of URLs to visit.
pub fn parse_url_list(contents: &str) -> Vec<String> {
    contents.lines().filter_map(normalize_input_line).collect()
}

/// Reads and parses the input file.
///
/// # Errors
///
/// Returns `CrawlError::InputNotFound` if the file does not exist and
/// `CrawlError::InputUnreadable` if it cannot be read as UTF-8 text.
pub async fn load_url_list(path: &Path) -> Result<Vec<String>, CrawlError> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(CrawlError::InputNotFound(path.to_path_buf()));
    }
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CrawlError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse_url_list(&contents))
}

/// Extracts the hostname from a URL.
///
/// The URL parser lower-cases DNS names and keeps IPv6 literals bracketed.
/// Returns `None` (with a warning) for unparseable URLs and URLs without a host.
pub fn extract_hostname(url: &str) -> Option<String> {
    match url::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => Some(host.to_string()),
            _ => {
                warn!("Skipping URL without a host: {url}");
                None
            }
        },
        Err(e) => {
            warn!("Skipping invalid URL {url}: {e}");
            None
        }
    }
}
