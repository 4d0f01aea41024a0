//! Rendering-mode fetcher: one fully scoped headless-browser session per
//! fetch.
//!
//! Browser, CDP handler task, and page live for exactly one call and are
//! torn down on every exit path, success or failure. No session reuse;
//! startup latency is traded for isolation between renders.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;

use super::{polite_pause, Fetcher};
use crate::error::ScrapeError;

/// Marker that signals the page has populated: structured metadata or any
/// price-looking element.
const READY_SELECTOR: &str = "meta[property='og:title'], [class*=price], [id*=price]";

/// Upper bound on waiting for [`READY_SELECTOR`] after navigation.
const READY_WAIT_MS: u64 = 8_000;

const READY_POLL_MS: u64 = 250;

/// Headless-browser fetcher for sites that populate content client-side.
pub struct RenderFetcher {
    delay_ms: u64,
    timeout_secs: u64,
    user_agent: Option<String>,
}

impl RenderFetcher {
    #[must_use]
    pub fn new(timeout_secs: u64, delay_ms: u64, user_agent: Option<String>) -> Self {
        Self {
            delay_ms,
            timeout_secs,
            user_agent,
        }
    }

    fn browser_config(&self, url: &str) -> Result<BrowserConfig, ScrapeError> {
        let mut builder = BrowserConfig::builder().args([
            "--disable-gpu",
            "--disable-dev-shm-usage",
            "--no-sandbox",
            "--disable-background-networking",
        ]);
        if let Some(ua) = &self.user_agent {
            builder = builder.arg(format!("--user-agent={ua}"));
        }
        builder.build().map_err(|reason| ScrapeError::Render {
            url: url.to_owned(),
            reason,
        })
    }

    /// Launches a browser, renders `url`, and tears everything down.
    async fn render(&self, url: &str) -> Result<String, ScrapeError> {
        let config = self.browser_config(url)?;
        let (mut browser, mut handler) = Browser::launch(config).await.map_err(|e| {
            ScrapeError::Render {
                url: url.to_owned(),
                reason: format!("launch failed: {e}"),
            }
        })?;
        let driver = tokio::spawn(async move { while handler.next().await.is_some() {} });

        let markup = Self::render_page(&browser, url).await;

        // Teardown runs on both the success and failure path before the
        // result is surfaced.
        if let Err(e) = browser.close().await {
            tracing::debug!(url, error = %e, "browser close failed during teardown");
        }
        driver.abort();

        markup
    }

    async fn render_page(browser: &Browser, url: &str) -> Result<String, ScrapeError> {
        let page = browser
            .new_page(url)
            .await
            .map_err(|e| ScrapeError::Render {
                url: url.to_owned(),
                reason: format!("navigation failed: {e}"),
            })?;

        // Wait for the readiness marker or give up after the bounded window;
        // either way the rendered markup is read as-is.
        let mut waited = 0;
        while waited < READY_WAIT_MS {
            if page.find_element(READY_SELECTOR).await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(READY_POLL_MS)).await;
            waited += READY_POLL_MS;
        }

        page.content().await.map_err(|e| ScrapeError::Render {
            url: url.to_owned(),
            reason: format!("could not read rendered content: {e}"),
        })
    }
}

#[async_trait]
impl Fetcher for RenderFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        polite_pause(self.delay_ms).await;

        // On timeout the in-flight session future is dropped; the spawned
        // browser child is killed by `Browser`'s Drop impl.
        let budget = Duration::from_secs(self.timeout_secs);
        match tokio::time::timeout(budget, self.render(url)).await {
            Ok(result) => result,
            Err(_) => Err(ScrapeError::RenderTimeout {
                url: url.to_owned(),
                timeout_secs: self.timeout_secs,
            }),
        }
    }
}
