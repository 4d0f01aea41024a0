//! Rendering fallback: sitemap-then-links discovery with every fetch going
//! through the headless-browser fetcher, for sites whose content only
//! exists after client-side scripts run.

use std::sync::Arc;

use async_trait::async_trait;

use suq_core::Listing;

use super::{collect_hinted_links, dedup_urls, search_urls, DiscoveryStrategy};
use crate::error::ScrapeError;
use crate::fetch::Fetcher;
use crate::origin::{site_domain, site_origin};
use crate::sitemap::sitemap_locs;

const PRODUCT_PATH_HINTS: [&str; 3] = ["/product", "/products/", "/item/"];

const LINK_HINTS: [&str; 8] = [
    "product",
    "products",
    "item",
    "p/",
    "gaming",
    "keyboard",
    "mouse",
    "headset",
];

/// Same discovery shape as the sitemap and link strategies, but rendered.
///
/// The fetcher handed in here is expected to be the rendering-mode one;
/// the strategy itself only depends on the [`Fetcher`] contract.
pub struct RenderStrategy {
    fetcher: Arc<dyn Fetcher>,
    origin: String,
    source: String,
}

impl RenderStrategy {
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
impl DiscoveryStrategy for RenderStrategy {
    fn name(&self) -> &'static str {
        "RenderStrategy"
    }

    async fn discover_urls(&self, limit: usize) -> Result<Vec<String>, ScrapeError> {
        let mut urls = Vec::new();

        let sitemap_url = format!("{}/sitemap.xml", self.origin);
        match self.fetcher.fetch(&sitemap_url).await {
            Ok(xml) => {
                urls.extend(sitemap_locs(&xml).into_iter().filter(|u| {
                    let lower = u.to_lowercase();
                    PRODUCT_PATH_HINTS.iter().any(|h| lower.contains(h))
                }));
            }
            Err(e) => {
                tracing::debug!(url = sitemap_url, error = %e, "rendered sitemap probe failed");
            }
        }

        // No sitemap signal: render the homepage and harvest hinted links.
        if urls.is_empty() {
            match self.fetcher.fetch(&self.origin).await {
                Ok(markup) => {
                    urls.extend(collect_hinted_links(&markup, &self.origin, &LINK_HINTS));
                }
                Err(e) => {
                    tracing::debug!(url = self.origin, error = %e, "rendered homepage fetch failed");
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
