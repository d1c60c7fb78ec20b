//! Core library for topdeck-proxy.
//!
//! Fetches recent EDH tournaments from the TopDeck.gg API, enriches them with
//! participant counts and per-standing commanders, keeps only the cEDH events
//! that have already started, and caches the result for a fixed window.
//!
//! The HTTP surface lives in the `topdeck-proxy-server` crate; everything here
//! is framework-free so it can be driven directly in tests.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod service;

pub use api::{ApiError, TopDeckClient, TournamentSource};
pub use cache::TournamentCache;
pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use models::Tournament;
pub use service::TournamentService;
