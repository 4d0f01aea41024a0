//! First-seen-wins duplicate collapsing, within a run and across runs.

use std::collections::HashSet;

use crate::identity::normalize_name;
use crate::listing::CatalogProduct;

/// Across-run dedup key set over `(identity, source)`.
///
/// The identity half of the key is the product's fingerprint, or, when a
/// record somehow carries an empty id, its normalized name. First-seen
/// wins: a later record under an already-seen key is dropped, not merged.
///
/// The index is plain single-threaded state; it is only touched by the
/// dedup stage after all sites have been processed. Persisting keys
/// between runs is the caller's job via [`DedupIndex::keys`] and
/// [`DedupIndex::preload`].
#[derive(Debug, Default)]
pub struct DedupIndex {
    seen: HashSet<(String, String)>,
}

impl DedupIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the index with keys from a previous run so that listings
    /// already seen historically are dropped this run.
    pub fn preload<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.seen.extend(keys);
    }

    /// All keys observed so far, for persistence between runs.
    pub fn keys(&self) -> impl Iterator<Item = &(String, String)> {
        self.seen.iter()
    }

    /// Returns `true` if the product's key was unseen and is now recorded.
    pub fn insert(&mut self, product: &CatalogProduct) -> bool {
        self.seen.insert(Self::key(product))
    }

    /// Drops every product whose key has already been seen, preserving the
    /// order of survivors. Idempotent: running the output through again
    /// removes nothing further.
    #[must_use]
    pub fn dedupe(&mut self, products: Vec<CatalogProduct>) -> Vec<CatalogProduct> {
        products.into_iter().filter(|p| self.insert(p)).collect()
    }

    fn key(product: &CatalogProduct) -> (String, String) {
        let identity = if product.id.is_empty() {
            normalize_name(&product.name)
        } else {
            product.id.clone()
        };
        (identity, product.source.clone())
    }
}

#[cfg(test)]
#[path = "dedup_test.rs"]
mod tests;
