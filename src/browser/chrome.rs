//! Chrome-backed page visitor (chromiumoxide over the DevTools protocol).

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::EventRequestWillBeSent;
use chromiumoxide::cdp::browser_protocol::page::NavigateParams;
use chromiumoxide::cdp::js_protocol::runtime::EventExceptionThrown;
use chromiumoxide::Page;
use futures::StreamExt;
use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::{Config, BROWSER_CLOSE_TIMEOUT};
use crate::error_handling::{BrowserError, ErrorType};

use super::{request_hostname, resolve_chrome_path, PageVisitor, VisitFailure, VisitReport};

/// A headless Chrome with a single page that is reused for every visit.
pub struct ChromeVisitor {
    browser: Browser,
    page: Page,
    handler_task: Option<JoinHandle<()>>,
    navigation_timeout: Duration,
    idle_window: Duration,
}

impl ChromeVisitor {
    /// Launches headless Chrome and opens the page used for browsing.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError` if Chrome cannot be found or started, or if the
    /// page cannot be created.
    pub async fn launch(config: &Config) -> Result<Self, BrowserError> {
        let mut builder = BrowserConfig::builder().request_timeout(config.navigation_timeout());
        match resolve_chrome_path(config.chrome_path.as_deref()) {
            Some(path) => {
                info!("Using Chrome executable {}", path.display());
                builder = builder.chrome_executable(path);
            }
            None => debug!("No Chrome path configured, letting chromiumoxide detect one"),
        }
        let browser_config = builder.build().map_err(BrowserError::Config)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(BrowserError::Launch)?;

        // The handler drives the DevTools websocket and must be polled for the
        // browser to make progress.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler error: {e}");
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(BrowserError::Page)?;

        Ok(Self {
            browser,
            page,
            handler_task: Some(handler_task),
            navigation_timeout: config.navigation_timeout(),
            idle_window: config.idle_window(),
        })
    }
}

#[async_trait]
impl PageVisitor for ChromeVisitor {
    async fn visit(&mut self, url: &str) -> VisitReport {
        let mut requests = match self.page.event_listener::<EventRequestWillBeSent>().await {
            Ok(stream) => stream,
            Err(e) => return VisitReport::failed(ErrorType::PageEventError, e.to_string()),
        };
        let mut exceptions = match self.page.event_listener::<EventExceptionThrown>().await {
            Ok(stream) => stream,
            Err(e) => return VisitReport::failed(ErrorType::PageEventError, e.to_string()),
        };
        let params = match NavigateParams::builder().url(url).build() {
            Ok(params) => params,
            Err(e) => return VisitReport::failed(ErrorType::InvalidUrl, e),
        };

        let mut report = VisitReport::default();
        let deadline = Instant::now() + self.navigation_timeout;

        // Phase 1: navigate, recording requests until the load event fires.
        let navigation = self.page.goto(params);
        tokio::pin!(navigation);
        let outcome = loop {
            tokio::select! {
                result = &mut navigation => break Some(result.map(|_| ())),
                _ = tokio::time::sleep_until(deadline) => break None,
                Some(event) = requests.next() => record_request(&mut report, &event),
                Some(event) = exceptions.next() => log_exception(url, &event),
            }
        };

        match outcome {
            None => {
                report.failure = Some(VisitFailure {
                    kind: ErrorType::NavigationTimeout,
                    message: format!(
                        "navigation did not finish within {}s",
                        self.navigation_timeout.as_secs()
                    ),
                });
                return report;
            }
            Some(Err(e)) => {
                report.failure = Some(VisitFailure {
                    kind: ErrorType::NavigationFailed,
                    message: e.to_string(),
                });
                return report;
            }
            Some(Ok(())) => {}
        }

        // Phase 2: keep recording until the network has been quiet for the
        // idle window, bounded by the navigation deadline.
        let mut idle_deadline = (Instant::now() + self.idle_window).min(deadline);
        loop {
            tokio::select! {
                event = requests.next() => match event {
                    Some(event) => {
                        record_request(&mut report, &event);
                        idle_deadline = (Instant::now() + self.idle_window).min(deadline);
                    }
                    None => break,
                },
                Some(event) = exceptions.next() => log_exception(url, &event),
                _ = tokio::time::sleep_until(idle_deadline) => break,
            }
        }

        report
    }

    async fn close(&mut self) -> anyhow::Result<()> {
        self.browser
            .close()
            .await
            .context("Failed to close browser")?;
        if let Some(mut task) = self.handler_task.take() {
            if tokio::time::timeout(BROWSER_CLOSE_TIMEOUT, &mut task)
                .await
                .is_err()
            {
                warn!("Browser handler did not stop in time, aborting it");
                task.abort();
            }
        }
        Ok(())
    }
}

fn record_request(report: &mut VisitReport, event: &Arc<EventRequestWillBeSent>) {
    match request_hostname(&event.request.url) {
        Some(host) => report.hostnames.push(host),
        None => debug!("Ignoring request without a host: {}", event.request.url),
    }
}

fn log_exception(url: &str, event: &Arc<EventExceptionThrown>) {
    let details = &event.exception_details;
    let description = details
        .exception
        .as_ref()
        .and_then(|exception| exception.description.as_deref())
        .unwrap_or(details.text.as_str());
    warn!("Page error on {url}: {description}");
}
