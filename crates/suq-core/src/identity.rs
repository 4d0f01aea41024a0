//! Stable listing identity: name normalization and fingerprinting.
//!
//! The fingerprint deliberately excludes price so that a price change
//! between runs never changes a listing's identity.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the full digest.
const FINGERPRINT_LEN: usize = 12;

/// Normalizes a product name for identity purposes: lowercase, keep only
/// `[a-z0-9+ ]`, collapse runs of whitespace, trim.
///
/// Idempotent: `normalize_name(normalize_name(s)) == normalize_name(s)`.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;
    for c in name.chars() {
        let c = c.to_ascii_lowercase();
        let keep = c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+';
        if keep {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            // Everything outside the kept set, space included, becomes a
            // single separating space.
            pending_space = true;
        }
    }
    out
}

/// Computes the stable short fingerprint for a listing.
///
/// `SHA-256("{source}|{normalize_name(name)}|{url}")`, truncated to 12 hex
/// characters. A pure function of exactly those three inputs; price does
/// not participate, so price drift across runs keeps the id stable.
#[must_use]
pub fn fingerprint(source: &str, name: &str, url: &str) -> String {
    use std::fmt::Write;

    let base = format!("{source}|{}|{url}", normalize_name(name));
    let digest = Sha256::digest(base.as_bytes());
    let mut hex = String::with_capacity(FINGERPRINT_LEN);
    for byte in digest.iter().take(FINGERPRINT_LEN / 2) {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
