use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::Tournament;

/// Serve cached tournaments for 5 minutes before refetching.
pub const CACHE_TTL_MINUTES: i64 = 5;

#[derive(Debug, Clone)]
pub struct CachedData<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T, cached_at: DateTime<Utc>) -> Self {
        Self { data, cached_at }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.cached_at
    }

    pub fn age_display(&self, now: DateTime<Utc>) -> String {
        let seconds = self.age(now).num_seconds();
        if seconds < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if seconds < 60 {
            format!("{}s ago", seconds)
        } else {
            format!("{}m ago", seconds / 60)
        }
    }

    /// Fresh while strictly younger than `ttl`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) < ttl
    }
}

/// Single-slot cache for the processed tournament list.
///
/// The result set and its timestamp are written together under one lock,
/// so readers never observe a half-written entry. Writes are
/// last-writer-wins.
pub struct TournamentCache {
    ttl: Duration,
    slot: RwLock<Option<CachedData<Arc<Vec<Tournament>>>>>,
}

impl TournamentCache {
    pub fn new() -> Self {
        Self::with_ttl(Duration::minutes(CACHE_TTL_MINUTES))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Return the cached entry if one exists and is still fresh at `now`.
    pub async fn read(&self, now: DateTime<Utc>) -> Option<CachedData<Arc<Vec<Tournament>>>> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some(entry) if entry.is_fresh(now, self.ttl) => Some(entry.clone()),
            Some(entry) => {
                debug!(age = %entry.age_display(now), "Cached tournaments expired");
                None
            }
            None => None,
        }
    }

    /// Replace the slot with `data` produced at `now`.
    pub async fn write(&self, data: Arc<Vec<Tournament>>, now: DateTime<Utc>) {
        let mut slot = self.slot.write().await;
        *slot = Some(CachedData::new(data, now));
    }
}

impl Default for TournamentCache {
    fn default() -> Self {
        Self::new()
    }
}
