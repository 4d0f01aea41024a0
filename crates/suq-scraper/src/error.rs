use thiserror::Error;

/// Per-fetch and per-strategy failures.
///
/// None of these are fatal to a run: the strategy loop treats a failed URL
/// as "contributed nothing" and the chain runner treats a failed strategy
/// as a log line before moving on.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The one fatal case: malformed run configuration, raised before any
    /// site is processed.
    #[error(transparent)]
    Config(#[from] suq_core::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("render failed for {url}: {reason}")]
    Render { url: String, reason: String },

    #[error("render timed out for {url} after {timeout_secs}s")]
    RenderTimeout { url: String, timeout_secs: u64 },

    #[error("invalid site URL \"{url}\": {reason}")]
    InvalidSiteUrl { url: String, reason: String },
}
