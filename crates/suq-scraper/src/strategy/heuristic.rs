//! Outbound-link discovery for sites with no usable sitemap.

use std::sync::Arc;

use async_trait::async_trait;

use suq_core::Listing;

use super::{collect_hinted_links, dedup_urls, search_urls, DiscoveryStrategy};
use crate::error::ScrapeError;
use crate::fetch::Fetcher;
use crate::origin::site_domain;

/// Curated URL keywords: generic product/item terms plus the accessory
/// vocabulary of the target catalog domain.
const LINK_HINTS: [&str; 12] = [
    "product",
    "products",
    "item",
    "gaming",
    "mouse",
    "keyboard",
    "headset",
    "pad",
    "controller",
    "ps5",
    "xbox",
    "rgb",
];

/// The catch-all: fetches the homepage, collects outbound links, and keeps
/// those whose absolute URL contains a curated hint.
pub struct HeuristicLinkStrategy {
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
    source: String,
}

impl HeuristicLinkStrategy {
    #[must_use]
    pub fn new(base_url: &str, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_owned(),
            source: site_domain(base_url),
        }
    }
}

#[async_trait]
impl DiscoveryStrategy for HeuristicLinkStrategy {
    fn name(&self) -> &'static str {
        "HeuristicLinkStrategy"
    }

    async fn discover_urls(&self, limit: usize) -> Result<Vec<String>, ScrapeError> {
        let markup = match self.fetcher.fetch(&self.base_url).await {
            Ok(markup) => markup,
            Err(e) => {
                tracing::debug!(url = self.base_url, error = %e, "homepage fetch failed");
                return Ok(Vec::new());
            }
        };
        let links = collect_hinted_links(&markup, &self.base_url, &LINK_HINTS);
        Ok(dedup_urls(links, limit))
    }

    async fn search(
        &self,
        keywords: &[String],
        limit: usize,
    ) -> Result<Vec<Listing>, ScrapeError> {
        let urls = self.discover_urls(limit).await?;
        Ok(search_urls(self.fetcher.as_ref(), &urls, keywords, &self.source, false).await)
    }
}
