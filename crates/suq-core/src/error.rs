use thiserror::Error;

/// Fatal configuration problems, surfaced before any site is processed.
///
/// Everything else in the pipeline (fetch failures, extraction gaps,
/// strategy failures) is recoverable and never aborts a run; these do.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid price range: min {min} exceeds max {max}")]
    InvalidPriceRange { min: String, max: String },

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("no sites configured")]
    NoSites,

    #[error("invalid site URL \"{url}\": {reason}")]
    InvalidSiteUrl { url: String, reason: String },
}
