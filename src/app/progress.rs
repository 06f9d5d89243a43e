//! Per-URL progress display.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while one URL is being visited.
///
/// Prints `(i/n) Processing <url>` while running and leaves a success or
/// failure line behind when finished. Draws nothing when stderr is not a
/// terminal.
pub struct UrlSpinner {
    bar: ProgressBar,
    position: usize,
    total: usize,
    url: String,
}

impl UrlSpinner {
    /// Starts a spinner for the `position`-th (1-based) of `total` URLs.
    pub fn start(position: usize, total: usize, url: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            bar.set_style(style);
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message(processing_message(position, total, url));
        Self {
            bar,
            position,
            total,
            url: url.to_string(),
        }
    }

    /// Marks the visit as successful.
    pub fn succeed(self) {
        self.bar.finish_with_message(format!(
            "✔ ({}/{}) Processed {}",
            self.position, self.total, self.url
        ));
    }

    /// Marks the visit as failed.
    pub fn fail(self) {
        self.bar.finish_with_message(format!(
            "✖ ({}/{}) Processed failed for {}",
            self.position, self.total, self.url
        ));
    }
}

fn processing_message(position: usize, total: usize, url: &str) -> String {
    format!("({position}/{total}) Processing {url}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_message() {
        assert_eq!(
            processing_message(3, 10, "http://example.com"),
            "(3/10) Processing http://example.com"
        );
    }

    #[test]
    fn test_spinner_finishes_without_terminal() {
        UrlSpinner::start(1, 2, "http://a.com").succeed();
        UrlSpinner::start(2, 2, "http://b.com").fail();
    }
}
