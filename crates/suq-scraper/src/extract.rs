//! Best-effort metadata extraction from page markup.
//!
//! Extraction never fails: every step short-circuits on first success and
//! an absent field stays absent. Structured social/product metadata is
//! always tried before visual-class heuristics; sites rarely expose a
//! uniform schema, and metadata-first keeps false positives low.

use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};

use suq_core::Listing;

use crate::price::{parse_meta_price, scan_price};

/// Structured metadata price properties, in priority order.
const PRICE_META_PROPS: [&str; 2] = ["product:price:amount", "og:price:amount"];

/// How many price-looking elements the visible-text scan inspects.
const MAX_PRICE_ELEMENTS: usize = 10;

const CATEGORY_SEPARATOR: &str = " > ";

/// Extracts a candidate listing from `markup` for the page at `url`.
///
/// Field chains, each stopping at the first hit:
/// - name: `og:title` meta, else the document title;
/// - price: metadata price properties, else a bounded scan of elements
///   whose class/id contains "price" (see [`crate::price::scan_price`] for
///   the accepted numeric shape and its known false positives);
/// - image: `og:image`; brand: `product:brand`.
///
/// Category is not handled here; see [`extract_category`].
#[must_use]
pub fn extract_listing(markup: &str, url: &str, source: &str) -> Listing {
    let doc = Html::parse_document(markup);
    let mut listing = Listing::empty(url, source);
    listing.name = extract_name(&doc).unwrap_or_default();
    listing.price = extract_price(&doc);
    listing.image_url = meta_content(&doc, "og:image");
    listing.brand = meta_content(&doc, "product:brand");
    listing
}

/// Extracts a category from the last two breadcrumb-link labels of the
/// first element whose class/id contains "breadcrumb".
///
/// Only the generic-sitemap strategy uses this; the other strategies leave
/// `category` unset.
#[must_use]
pub fn extract_category(markup: &str) -> Option<String> {
    let doc = Html::parse_document(markup);
    let crumbs = Selector::parse("[class*=breadcrumb], [id*=breadcrumb]")
        .expect("valid breadcrumb selector");
    let anchors = Selector::parse("a").expect("valid anchor selector");

    let container = doc.select(&crumbs).next()?;
    let labels: Vec<String> = container
        .select(&anchors)
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect();
    if labels.is_empty() {
        return None;
    }
    let tail = labels.len().saturating_sub(2);
    Some(labels[tail..].join(CATEGORY_SEPARATOR))
}

fn extract_name(doc: &Html) -> Option<String> {
    if let Some(title) = meta_content(doc, "og:title") {
        return Some(title);
    }
    let title = Selector::parse("title").expect("valid title selector");
    doc.select(&title)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
}

fn extract_price(doc: &Html) -> Option<Decimal> {
    for prop in PRICE_META_PROPS {
        if let Some(raw) = meta_content(doc, prop) {
            if let Some(price) = parse_meta_price(&raw) {
                return Some(price);
            }
        }
    }

    let priceish =
        Selector::parse("[class*=price], [id*=price]").expect("valid price selector");
    doc.select(&priceish)
        .take(MAX_PRICE_ELEMENTS)
        .find_map(|el| scan_price(&element_text(el)))
}

/// First non-empty `content` of a `<meta>` tag matching `prop` on either
/// its `property` or `name` attribute.
fn meta_content(doc: &Html, prop: &str) -> Option<String> {
    for attr in ["property", "name"] {
        let Ok(selector) = Selector::parse(&format!("meta[{attr}=\"{prop}\"]")) else {
            continue;
        };
        let content = doc
            .select(&selector)
            .find_map(|el| el.value().attr("content"))
            .map(str::trim)
            .filter(|c| !c.is_empty());
        if let Some(content) = content {
            return Some(content.to_owned());
        }
    }
    None
}

/// Visible text of an element: text nodes joined by single spaces, trimmed.
fn element_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
