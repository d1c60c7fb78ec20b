//! Request handling for the tournaments endpoint.
//!
//! `TournamentService::tournaments` runs one request through:
//!
//! 1. cache read (hit returns immediately)
//! 2. upstream fetch (failure returns the error, cache untouched)
//! 3. transform, then filter/sort
//! 4. cache write, then return
//!
//! Concurrent misses are not coalesced: two requests that both miss will
//! both fetch, and the later write wins.

use std::sync::Arc;

use tracing::info;

use crate::api::{ApiError, TournamentSource};
use crate::cache::TournamentCache;
use crate::clock::Clock;
use crate::models::Tournament;
use crate::pipeline;

pub struct TournamentService {
    source: Arc<dyn TournamentSource>,
    clock: Arc<dyn Clock>,
    cache: TournamentCache,
}

impl TournamentService {
    pub fn new(source: Arc<dyn TournamentSource>, clock: Arc<dyn Clock>) -> Self {
        Self::with_cache(source, clock, TournamentCache::new())
    }

    pub fn with_cache(
        source: Arc<dyn TournamentSource>,
        clock: Arc<dyn Clock>,
        cache: TournamentCache,
    ) -> Self {
        Self {
            source,
            clock,
            cache,
        }
    }

    pub fn cache(&self) -> &TournamentCache {
        &self.cache
    }

    /// Processed tournaments, from cache when fresh.
    pub async fn tournaments(&self) -> Result<Arc<Vec<Tournament>>, ApiError> {
        let now = self.clock.now();

        if let Some(cached) = self.cache.read(now).await {
            info!(age = %cached.age_display(now), "Returning cached tournament data");
            return Ok(cached.data);
        }

        info!("Fetching fresh tournament data from API");
        let raw = self.source.fetch_tournaments().await?;

        let processed = Arc::new(pipeline::process(&raw, now));
        self.cache.write(Arc::clone(&processed), now).await;

        Ok(processed)
    }
}
