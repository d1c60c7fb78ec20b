//! Data models for TopDeck.gg tournament payloads.
//!
//! Upstream records have an open, partly inconsistent shape, so they are kept
//! as ordered JSON maps and read through accessors that tolerate missing or
//! wrong-typed fields:
//!
//! - `Tournament`: one tournament record with name/start-date/standings access
//! - `CommanderSource`: the precedence rules for a standing's deck description

pub mod deck;
pub mod tournament;

pub use deck::{CommanderSource, MAX_COMMANDERS};
pub use tournament::Tournament;
