use rust_decimal::Decimal;

use crate::error::ConfigError;

/// When the chain runner escalates from static fetching to a headless
/// render of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Static strategies first; render only if they yield too little.
    Auto,
    /// Render first, static strategies as the fallback.
    Always,
    /// Static strategies only.
    Never,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Auto => write!(f, "auto"),
            RenderMode::Always => write!(f, "always"),
            RenderMode::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(RenderMode::Auto),
            "always" => Ok(RenderMode::Always),
            "never" => Ok(RenderMode::Never),
            other => Err(format!("unknown render mode \"{other}\"")),
        }
    }
}

/// Run-wide scrape parameters, handed in by the caller.
///
/// There is no env/file loading here; how the values are sourced is an
/// external collaborator's concern.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Per-fetch timeout in seconds.
    pub timeout_secs: u64,
    /// Base inter-request delay in milliseconds. A bounded random jitter
    /// is added on top of this before every fetch.
    pub delay_ms: u64,
    /// Custom client identity header; `None` uses the built-in default.
    pub user_agent: Option<String>,
    /// Maximum product pages fetched per site; 0 means unbounded.
    pub limit_per_site: usize,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub render_mode: RenderMode,
    /// Discovery-time name filter: when non-empty, only listings whose
    /// name contains at least one of these survives a strategy's search.
    pub keywords: Vec<String>,
    /// Cleaning-stage allow list; empty means allow all.
    pub include_terms: Vec<String>,
    /// Cleaning-stage deny list.
    pub exclude_terms: Vec<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 25,
            delay_ms: 900,
            user_agent: None,
            limit_per_site: 0,
            min_price: Decimal::from(100),
            max_price: Decimal::from(2500),
            render_mode: RenderMode::Auto,
            keywords: Vec::new(),
            include_terms: Vec::new(),
            exclude_terms: Vec::new(),
        }
    }
}

impl ScrapeConfig {
    /// Validates the configuration before a run starts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPriceRange`] when `min_price` exceeds
    /// `max_price`, and [`ConfigError::ZeroTimeout`] when `timeout_secs`
    /// is zero. These are the only fatal errors in the system; everything
    /// downstream is swallow-and-continue.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_price > self.max_price {
            return Err(ConfigError::InvalidPriceRange {
                min: self.min_price.to_string(),
                max: self.max_price.to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
