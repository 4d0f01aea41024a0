pub mod clean;
pub mod config;
pub mod dedup;
pub mod error;
pub mod identity;
pub mod listing;
pub mod report;

pub use clean::clean;
pub use config::{RenderMode, ScrapeConfig};
pub use dedup::DedupIndex;
pub use error::ConfigError;
pub use identity::{fingerprint, normalize_name};
pub use listing::{CatalogProduct, ExportRow, Listing, DEFAULT_CURRENCY};
pub use report::RunSummary;
