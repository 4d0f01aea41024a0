//! The whole run: sites in, canonical catalog plus summary out.
//!
//! Sites are processed strictly one after another, one fetch in flight at
//! a time. A site's failures only ever reduce its own counts; the run
//! always completes and emits a summary, even when every site yields
//! nothing.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;

use suq_core::{clean, CatalogProduct, ConfigError, DedupIndex, RenderMode, RunSummary, ScrapeConfig};

use crate::error::ScrapeError;
use crate::fetch::{Fetcher, HttpFetcher, RenderFetcher};
use crate::origin::site_domain;
use crate::runner::StrategyChain;
use crate::strategy::{
    GenericSitemapStrategy, HeuristicLinkStrategy, RenderStrategy, ShopifySitemapStrategy,
};

/// One site's slice of the run output.
#[derive(Debug)]
pub struct SiteReport {
    /// Site domain the report belongs to.
    pub site: String,
    /// Promoted products in discovery order.
    pub products: Vec<CatalogProduct>,
    /// Strategy-by-strategy run log for this site.
    pub log: Vec<String>,
}

/// Everything a run produces, handed to external export/report collaborators.
#[derive(Debug)]
pub struct RunOutput {
    pub per_site: Vec<SiteReport>,
    /// Combined raw sequence across all sites, site order preserved.
    pub raw: Vec<CatalogProduct>,
    /// Cleaned and deduplicated canonical sequence.
    pub clean: Vec<CatalogProduct>,
    pub summary: RunSummary,
}

/// Runs the full pipeline over `sites` with a fresh dedup index.
///
/// # Errors
///
/// Returns [`ScrapeError::Config`] for malformed configuration or site
/// URLs (checked before any fetch), or [`ScrapeError::Http`] if the shared
/// HTTP client cannot be constructed. Nothing else is fatal.
pub async fn run(sites: &[String], config: &ScrapeConfig) -> Result<RunOutput, ScrapeError> {
    let mut dedup = DedupIndex::new();
    run_with_cancel(sites, config, &mut dedup, &AtomicBool::new(false)).await
}

/// Runs the full pipeline with a caller-owned dedup index (preloadable
/// with keys from earlier runs) and a cancellation flag.
///
/// The flag is checked before each site: setting it stops the run before
/// the next site begins, and whatever was gathered so far is cleaned,
/// deduplicated, and summarized as usual. Mid-fetch cancellation is not
/// attempted; the fetch timeout bounds the worst case.
///
/// # Errors
///
/// Same contract as [`run`].
pub async fn run_with_cancel(
    sites: &[String],
    config: &ScrapeConfig,
    dedup: &mut DedupIndex,
    cancel: &AtomicBool,
) -> Result<RunOutput, ScrapeError> {
    config.validate()?;
    validate_sites(sites)?;

    // One shared static client for the whole run; render sessions are
    // per-fetch and need no shared state beyond their parameters.
    let static_fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(
        config.timeout_secs,
        config.delay_ms,
        config.user_agent.as_deref(),
    )?);

    let mut per_site = Vec::new();
    let mut raw: Vec<CatalogProduct> = Vec::new();
    let mut per_site_counts = BTreeMap::new();

    for site in sites {
        if cancel.load(Ordering::Relaxed) {
            tracing::info!(site, "cancellation requested, stopping before next site");
            break;
        }

        let domain = site_domain(site);
        tracing::info!(site = domain, "starting site");

        let chain = build_chain(site, config, &static_fetcher);
        let outcome = chain.run(&config.keywords, config.limit_per_site).await;

        let scraped_at = Utc::now();
        let products: Vec<CatalogProduct> = outcome
            .listings
            .into_iter()
            .map(|listing| listing.promote(scraped_at))
            .collect();

        tracing::info!(site = domain, count = products.len(), "site finished");
        per_site_counts.insert(domain.clone(), products.len());
        raw.extend(products.iter().cloned());
        per_site.push(SiteReport {
            site: domain,
            products,
            log: outcome.log,
        });
    }

    let cleaned = dedup.dedupe(clean(raw.clone(), config));

    let summary = RunSummary {
        generated_at: Utc::now(),
        min_price: config.min_price,
        max_price: config.max_price,
        per_site_counts,
        total_raw: raw.len(),
        total_clean: cleaned.len(),
        render_mode: config.render_mode.to_string(),
    };

    Ok(RunOutput {
        per_site,
        raw,
        clean: cleaned,
        summary,
    })
}

/// Builds the default chain for one site: the three static strategies in
/// priority order, plus the rendering fallback unless the mode rules it
/// out.
fn build_chain(
    site: &str,
    config: &ScrapeConfig,
    static_fetcher: &Arc<dyn Fetcher>,
) -> StrategyChain {
    let static_strategies: Vec<Box<dyn crate::strategy::DiscoveryStrategy>> = vec![
        Box::new(ShopifySitemapStrategy::new(site, Arc::clone(static_fetcher))),
        Box::new(GenericSitemapStrategy::new(site, Arc::clone(static_fetcher))),
        Box::new(HeuristicLinkStrategy::new(site, Arc::clone(static_fetcher))),
    ];

    let render_strategy = if config.render_mode == RenderMode::Never {
        None
    } else {
        let render_fetcher: Arc<dyn Fetcher> = Arc::new(RenderFetcher::new(
            config.timeout_secs,
            config.delay_ms,
            config.user_agent.clone(),
        ));
        Some(Box::new(RenderStrategy::new(site, render_fetcher))
            as Box<dyn crate::strategy::DiscoveryStrategy>)
    };

    StrategyChain::new(static_strategies, render_strategy, config.render_mode)
}

fn validate_sites(sites: &[String]) -> Result<(), ConfigError> {
    if sites.is_empty() {
        return Err(ConfigError::NoSites);
    }
    for site in sites {
        reqwest::Url::parse(site).map_err(|e| ConfigError::InvalidSiteUrl {
            url: site.clone(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}
