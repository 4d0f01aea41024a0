//! Sitemap discovery tuned to the Shopify URL convention.

use std::sync::Arc;

use async_trait::async_trait;

use suq_core::Listing;

use super::{dedup_urls, search_urls, DiscoveryStrategy};
use crate::error::ScrapeError;
use crate::fetch::Fetcher;
use crate::origin::{site_domain, site_origin};
use crate::sitemap::sitemap_locs;

/// Conventional Shopify sitemap locations, probed in order.
const SITEMAP_PATHS: [&str; 3] = [
    "/sitemap.xml",
    "/sitemap_products_1.xml",
    "/sitemap_products.xml",
];

/// Shopify stores always put product pages under this path segment.
const PRODUCT_SEGMENT: &str = "/products/";

/// Probes the short list of conventional Shopify sitemap paths and keeps
/// location entries under `/products/`.
pub struct ShopifySitemapStrategy {
    fetcher: Arc<dyn Fetcher>,
    origin: String,
    source: String,
}

impl ShopifySitemapStrategy {
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
impl DiscoveryStrategy for ShopifySitemapStrategy {
    fn name(&self) -> &'static str {
        "ShopifySitemapStrategy"
    }

    async fn discover_urls(&self, limit: usize) -> Result<Vec<String>, ScrapeError> {
        let mut urls = Vec::new();
        for path in SITEMAP_PATHS {
            let sitemap_url = format!("{}{path}", self.origin);
            match self.fetcher.fetch(&sitemap_url).await {
                Ok(xml) => {
                    urls.extend(
                        sitemap_locs(&xml)
                            .into_iter()
                            .filter(|u| u.contains(PRODUCT_SEGMENT)),
                    );
                }
                Err(e) => {
                    tracing::debug!(url = sitemap_url, error = %e, "sitemap probe failed");
                }
            }
        }
        Ok(dedup_urls(urls, limit))
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
