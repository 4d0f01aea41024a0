//! Price-shaped number scanning for noisy page text.
//!
//! The visible-text heuristic accepts any bare 2–6 digit number with an
//! optional 2-digit fraction. That shape deliberately carries no currency
//! or plausibility check, so it can and does capture SKUs, review counts,
//! and similar numerics on "price-looking" elements; the cleaning stage's
//! min/max price gate is the only plausibility filter. This is a known
//! false-positive source kept as-is for stable behavior.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a structured-metadata price value: thousands separators stripped,
/// then the whole string must be one decimal number.
#[must_use]
pub fn parse_meta_price(text: &str) -> Option<Decimal> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(cleaned.trim()).ok()
}

/// Scans free text for the first price-shaped number: 2 to 6 digits not
/// adjacent to other digits, optionally followed by a separator and exactly
/// two fraction digits.
///
/// Thousands separators and non-breaking spaces are stripped before
/// scanning, so `"1,250.00 EGP"` yields `1250.00`.
#[must_use]
pub fn scan_price(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    let cleaned: String = text
        .chars()
        .map(|c| if c == '\u{a0}' { ' ' } else { c })
        .filter(|c| *c != ',')
        .collect();

    let bytes = cleaned.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    while i < len {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        // Maximal digit run starting at i.
        let start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let run_len = i - start;
        if !(2..=6).contains(&run_len) {
            continue;
        }

        // Optional ".dd" fraction, only when not followed by a third digit.
        let mut end = i;
        if i + 2 < len
            && bytes[i] == b'.'
            && bytes[i + 1].is_ascii_digit()
            && bytes[i + 2].is_ascii_digit()
            && (i + 3 >= len || !bytes[i + 3].is_ascii_digit())
        {
            end = i + 3;
        }

        if let Ok(value) = Decimal::from_str(&cleaned[start..end]) {
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
#[path = "price_test.rs"]
mod tests;
