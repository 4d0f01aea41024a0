pub mod error;
pub mod extract;
pub mod fetch;
pub mod origin;
pub mod pipeline;
pub mod price;
pub mod runner;
pub mod sitemap;
pub mod strategy;

pub use error::ScrapeError;
pub use extract::{extract_category, extract_listing};
pub use fetch::{Fetcher, HttpFetcher, RenderFetcher};
pub use pipeline::{run, run_with_cancel, RunOutput, SiteReport};
pub use runner::{ChainOutcome, StrategyChain};
pub use strategy::{
    DiscoveryStrategy, GenericSitemapStrategy, HeuristicLinkStrategy, RenderStrategy,
    ShopifySitemapStrategy,
};
