use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::identity::fingerprint;

/// Currency assumed for all scraped prices when a site does not say otherwise.
pub const DEFAULT_CURRENCY: &str = "EGP";

/// A best-effort candidate record produced for one discovered URL.
///
/// Only `url` and `source` are guaranteed non-empty. Every other field may
/// be absent or empty; that signals an extraction gap, not an error, and
/// downstream stages (cleaning, dedup) decide what to do about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Product display name. Empty when no title could be extracted.
    pub name: String,
    /// Extracted price, if any numeric shape was found on the page.
    pub price: Option<Decimal>,
    /// ISO-ish currency code; defaults to [`DEFAULT_CURRENCY`].
    pub currency: String,
    /// Absolute product-page URL. Always non-empty.
    pub url: String,
    pub image_url: Option<String>,
    pub brand: Option<String>,
    /// Breadcrumb-derived category. Filled by exactly one discovery
    /// strategy; all others leave it `None`.
    pub category: Option<String>,
    /// Site identity, e.g. the domain the listing was scraped from.
    pub source: String,
}

impl Listing {
    /// Creates an empty listing for `url` attributed to `source`, with all
    /// extractable fields absent and the default currency.
    #[must_use]
    pub fn empty(url: &str, source: &str) -> Self {
        Self {
            name: String::new(),
            price: None,
            currency: DEFAULT_CURRENCY.to_owned(),
            url: url.to_owned(),
            image_url: None,
            brand: None,
            category: None,
            source: source.to_owned(),
        }
    }

    /// Promotes this listing to a [`CatalogProduct`] by stamping the stable
    /// fingerprint and a scrape timestamp.
    #[must_use]
    pub fn promote(self, scraped_at: DateTime<Utc>) -> CatalogProduct {
        let id = fingerprint(&self.source, &self.name, &self.url);
        CatalogProduct {
            id,
            name: self.name,
            price: self.price,
            currency: self.currency,
            url: self.url,
            image_url: self.image_url,
            brand: self.brand,
            category: self.category,
            source: self.source,
            scraped_at,
        }
    }
}

/// A canonical catalog record: a [`Listing`] with a stable identity.
///
/// `id` is a pure function of `(source, normalized name, url)`, never of
/// price, so two scrapes of the same listing at different prices carry the
/// same id and are recognized as the same logical product across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Stable 12-hex-char fingerprint. See [`crate::identity::fingerprint`].
    pub id: String,
    pub name: String,
    pub price: Option<Decimal>,
    pub currency: String,
    pub url: String,
    pub image_url: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub source: String,
    pub scraped_at: DateTime<Utc>,
}

impl CatalogProduct {
    /// Maps this product onto the strict export schema handed to downstream
    /// consumers. Field order is a contract; `brand` and `category` are
    /// internal-only and never exported.
    #[must_use]
    pub fn to_export_row(&self) -> ExportRow {
        ExportRow {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            currency: self.currency.clone(),
            url: self.url.clone(),
            source: self.source.clone(),
            timestamp: self.scraped_at,
        }
    }
}

/// The canonical export schema. Declaration order here is the serialized
/// field order downstream consumers rely on: `id, name, price, currency,
/// url, source, timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRow {
    pub id: String,
    pub name: String,
    pub price: Option<Decimal>,
    pub currency: String,
    pub url: String,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
