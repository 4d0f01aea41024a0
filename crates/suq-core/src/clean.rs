//! The cleaning/filter stage that turns the raw combined set into the
//! canonical output set.

use crate::config::ScrapeConfig;
use crate::listing::CatalogProduct;

/// Applies the cleaning gates in order, returning the surviving subset:
///
/// 1. drop records with no price;
/// 2. drop prices outside `[min_price, max_price]` inclusive;
/// 3. drop records with an empty name;
/// 4. optional keyword pass: when include terms are configured the name
///    must contain at least one of them, and it must contain none of the
///    exclude terms (case-insensitive substring matches).
///
/// Identity is assigned before cleaning, so a record filtered out here in
/// one run still carries the same id if it survives a later run.
#[must_use]
pub fn clean(products: Vec<CatalogProduct>, config: &ScrapeConfig) -> Vec<CatalogProduct> {
    products
        .into_iter()
        .filter(|p| keep(p, config))
        .collect()
}

fn keep(product: &CatalogProduct, config: &ScrapeConfig) -> bool {
    let Some(price) = product.price else {
        return false;
    };
    if price < config.min_price || price > config.max_price {
        return false;
    }
    if product.name.is_empty() {
        return false;
    }
    matches_terms(&product.name, &config.include_terms, &config.exclude_terms)
}

/// Keyword allow/deny pass. An empty include list allows everything.
fn matches_terms(name: &str, include: &[String], exclude: &[String]) -> bool {
    let lower = name.to_lowercase();
    if !include.is_empty() && !include.iter().any(|t| lower.contains(&t.to_lowercase())) {
        return false;
    }
    !exclude.iter().any(|t| lower.contains(&t.to_lowercase()))
}

#[cfg(test)]
#[path = "clean_test.rs"]
mod tests;
