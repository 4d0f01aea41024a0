//! Static-mode fetcher: one rate-limited HTTP GET per call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{polite_pause, Fetcher};
use crate::error::ScrapeError;

/// Client identity sent when the caller does not supply one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; SuqScraper/1.0)";

/// Locale preference sent with every request.
const ACCEPT_LANGUAGE: &str = "en-EG,en;q=0.9,ar-EG;q=0.8";

/// Rate-limited static HTTP fetcher.
///
/// Sleeps `delay_ms` plus bounded jitter before every request. Any non-2xx
/// final status (after redirects) is a [`ScrapeError::UnexpectedStatus`].
pub struct HttpFetcher {
    client: Client,
    delay_ms: u64,
}

impl HttpFetcher {
    /// Creates a fetcher with the given per-request timeout, inter-request
    /// delay, and optional client identity.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        delay_ms: u64,
        user_agent: Option<&str>,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()?;
        Ok(Self { client, delay_ms })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        polite_pause(self.delay_ms).await;

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}
