use chrono::{DateTime, Utc};

use crate::models::Tournament;

/// Substring a tournament name must contain (case-insensitive)
pub const NAME_KEYWORD: &str = "cedh";

/// Keep cEDH tournaments that have already started, newest first.
///
/// Ties on start date keep their upstream order.
pub fn select_started_cedh(tournaments: Vec<Tournament>, now: DateTime<Utc>) -> Vec<Tournament> {
    let now_secs = now.timestamp() as f64;

    let mut selected: Vec<Tournament> = tournaments
        .into_iter()
        .filter(|t| t.name_contains(NAME_KEYWORD) && t.start_date() <= now_secs)
        .collect();

    selected.sort_by(|a, b| b.start_date().total_cmp(&a.start_date()));
    selected
}
