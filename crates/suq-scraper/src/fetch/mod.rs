//! Rate-limited page retrieval behind one contract.
//!
//! Two fetch modes exist: a plain HTTP GET ([`HttpFetcher`]) and a headless
//! browser render ([`RenderFetcher`]). Callers never treat a fetch failure
//! as fatal; a failed URL simply contributes nothing to discovery.

mod http;
mod render;

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

use crate::error::ScrapeError;

pub use http::{HttpFetcher, DEFAULT_USER_AGENT};
pub use render::RenderFetcher;

/// Upper bound of the uniform random jitter added to the base delay.
const JITTER_MS: u64 = 300;

/// Retrieves a URL's (possibly rendered) markup.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` and returns its markup.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError`] on any network, status, navigation, or
    /// timeout failure. The call is always bounded by the configured
    /// timeout; it never hangs indefinitely.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Sleeps `delay_ms` plus a uniform jitter in `0..=300` ms before a request.
///
/// The jitter desynchronizes request timing so repeated runs do not hit a
/// host in a fixed cadence.
async fn polite_pause(delay_ms: u64) {
    let jitter = rand::rng().random_range(0..=JITTER_MS);
    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
}
