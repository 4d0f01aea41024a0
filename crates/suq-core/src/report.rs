use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Machine-readable summary of one complete run, emitted even when every
/// site yielded nothing; zero results is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub min_price: Decimal,
    pub max_price: Decimal,
    /// Raw listing count per site domain, in site order.
    pub per_site_counts: BTreeMap<String, usize>,
    pub total_raw: usize,
    pub total_clean: usize,
    /// The configured escalation mode, as its textual form.
    pub render_mode: String,
}
