//! Tournament processing pipeline.
//!
//! Raw upstream payloads go through two stages, always in this order:
//!
//! 1. `transform`: adds `data.participants` and `standings[].commanders`
//! 2. `filter`: keeps started cEDH events, newest first
//!
//! Both stages are total: malformed payloads degrade to empty results.

pub mod filter;
pub mod transform;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::info;

use crate::models::Tournament;

pub use filter::{select_started_cedh, NAME_KEYWORD};
pub use transform::enrich_tournaments;

/// Run the full pipeline over a raw upstream payload.
pub fn process(raw: &Value, now: DateTime<Utc>) -> Vec<Tournament> {
    let enriched = enrich_tournaments(raw);
    let selected = select_started_cedh(enriched, now);
    info!(count = selected.len(), "After filtering by cEDH name");
    selected
}
