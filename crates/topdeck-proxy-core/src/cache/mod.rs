//! In-memory caching module for the processed tournament list.
//!
//! This module provides the `TournamentCache`: a single process-wide slot
//! holding the last successfully processed result set and the time it was
//! produced. Entries are fresh for 5 minutes; expiry is only checked on read.

pub mod manager;

pub use manager::{CachedData, TournamentCache, CACHE_TTL_MINUTES};
