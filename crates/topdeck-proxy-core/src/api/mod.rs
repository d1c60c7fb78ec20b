//! Upstream client module for the TopDeck.gg tournaments API.
//!
//! This module provides the `TopDeckClient` which issues a single
//! authenticated POST per fetch, and the `TournamentSource` trait the
//! service depends on so it can be driven by stubs.
//!
//! The API authenticates with the raw API key in the `Authorization` header.

pub mod client;
pub mod error;

pub use client::{TopDeckClient, TournamentQuery, TournamentSource, DEFAULT_API_URL};
pub use error::ApiError;
