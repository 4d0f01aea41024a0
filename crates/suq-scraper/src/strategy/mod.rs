//! Discovery strategies: each proposes candidate product URLs for a site
//! using a different signal, then turns them into candidate listings with
//! the shared fetch-and-extract loop.

mod generic;
mod heuristic;
mod render;
mod shopify;

use std::collections::HashSet;

use async_trait::async_trait;
use scraper::{Html, Selector};

use suq_core::Listing;

use crate::error::ScrapeError;
use crate::extract::{extract_category, extract_listing};
use crate::fetch::Fetcher;

pub use generic::GenericSitemapStrategy;
pub use heuristic::HeuristicLinkStrategy;
pub use render::RenderStrategy;
pub use shopify::ShopifySitemapStrategy;

/// One way of discovering and extracting a site's product listings.
#[async_trait]
pub trait DiscoveryStrategy: Send + Sync {
    /// Strategy name as it appears in run logs.
    fn name(&self) -> &'static str;

    /// Proposes candidate product URLs, first-seen order, deduplicated.
    /// `limit` of 0 means unbounded.
    ///
    /// # Errors
    ///
    /// Strategies swallow per-URL fetch failures internally; an `Err` means
    /// the strategy as a whole could not run. The chain runner logs it and
    /// moves on.
    async fn discover_urls(&self, limit: usize) -> Result<Vec<String>, ScrapeError>;

    /// Discovers URLs, extracts a listing per URL (skipping failed
    /// fetches), drops listings with an empty name, and, when `keywords`
    /// is non-empty, keeps only names containing at least one keyword.
    ///
    /// # Errors
    ///
    /// Same contract as [`DiscoveryStrategy::discover_urls`].
    async fn search(&self, keywords: &[String], limit: usize)
        -> Result<Vec<Listing>, ScrapeError>;
}

/// Case-insensitive any-keyword name filter; empty keyword list passes all.
pub(crate) fn name_matches_keywords(name: &str, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }
    let lower = name.to_lowercase();
    keywords.iter().any(|k| lower.contains(&k.to_lowercase()))
}

/// De-duplicates while preserving first-seen order, then applies `limit`
/// (0 = unbounded).
pub(crate) fn dedup_urls(urls: Vec<String>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for url in urls {
        if seen.insert(url.clone()) {
            out.push(url);
        }
    }
    if limit > 0 {
        out.truncate(limit);
    }
    out
}

/// The shared fetch → extract → filter loop behind every strategy's
/// `search`. Fetch failures skip the URL; nothing aborts the loop.
pub(crate) async fn search_urls(
    fetcher: &dyn Fetcher,
    urls: &[String],
    keywords: &[String],
    source: &str,
    category_from_breadcrumbs: bool,
) -> Vec<Listing> {
    let mut out = Vec::new();
    for url in urls {
        let markup = match fetcher.fetch(url).await {
            Ok(markup) => markup,
            Err(e) => {
                tracing::debug!(url, error = %e, "skipping URL after fetch failure");
                continue;
            }
        };
        let mut listing = extract_listing(&markup, url, source);
        if listing.name.is_empty() {
            continue;
        }
        if !name_matches_keywords(&listing.name, keywords) {
            continue;
        }
        if category_from_breadcrumbs {
            listing.category = extract_category(&markup);
        }
        out.push(listing);
    }
    out
}

/// Collects outbound links from `markup`, absolutized against `base`,
/// keeping only URLs whose lowercase form contains one of `hints`.
/// Fragment, `mailto:`, and `tel:` links are skipped.
pub(crate) fn collect_hinted_links(markup: &str, base: &str, hints: &[&str]) -> Vec<String> {
    let doc = Html::parse_document(markup);
    let anchors = Selector::parse("a[href]").expect("valid anchor selector");
    let base_url = reqwest::Url::parse(base).ok();

    let mut out = Vec::new();
    for el in doc.select(&anchors) {
        let Some(href) = el.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
        {
            continue;
        }
        let full = match &base_url {
            Some(base) => match base.join(href) {
                Ok(url) => url.to_string(),
                Err(_) => continue,
            },
            None => href.to_owned(),
        };
        let lower = full.to_lowercase();
        if hints.iter().any(|h| lower.contains(h)) {
            out.push(full);
        }
    }
    out
}

#[cfg(test)]
#[path = "helpers_test.rs"]
mod tests;
