//! Generic sitemap discovery for non-Shopify platforms.

use std::sync::Arc;

use async_trait::async_trait;

use suq_core::Listing;

use super::{dedup_urls, search_urls, DiscoveryStrategy};
use crate::error::ScrapeError;
use crate::fetch::Fetcher;
use crate::origin::{site_domain, site_origin};
use crate::sitemap::sitemap_locs;

/// Path fragments that mark a sitemap entry as product-like.
const PRODUCT_PATH_HINTS: [&str; 4] = ["/product", "/products", "/item", "/p/"];

/// Probes the canonical `/sitemap.xml` and keeps entries whose path looks
/// product-like. The one strategy that also reads breadcrumb categories.
pub struct GenericSitemapStrategy {
    fetcher: Arc<dyn Fetcher>,
    origin: String,
    source: String,
}

impl GenericSitemapStrategy {
    #[must_use]
    pub fn new(base_url: &str, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            origin: site_origin(base_url),
            source: site_domain(base_url),
        }
    }
}

#[async_trait]
impl DiscoveryStrategy for GenericSitemapStrategy {
    fn name(&self) -> &'static str {
        "GenericSitemapStrategy"
    }

    async fn discover_urls(&self, limit: usize) -> Result<Vec<String>, ScrapeError> {
        let sitemap_url = format!("{}/sitemap.xml", self.origin);
        let xml = match self.fetcher.fetch(&sitemap_url).await {
            Ok(xml) => xml,
            Err(e) => {
                tracing::debug!(url = sitemap_url, error = %e, "sitemap probe failed");
                return Ok(Vec::new());
            }
        };
        let product_like = sitemap_locs(&xml)
            .into_iter()
            .filter(|u| {
                let lower = u.to_lowercase();
                PRODUCT_PATH_HINTS.iter().any(|h| lower.contains(h))
            })
            .collect();
        Ok(dedup_urls(product_like, limit))
    }

    async fn search(
        &self,
        keywords: &[String],
        limit: usize,
    ) -> Result<Vec<Listing>, ScrapeError> {
        let urls = self.discover_urls(limit).await?;
        Ok(search_urls(self.fetcher.as_ref(), &urls, keywords, &self.source, true).await)
    }
}
