//! API client for the TopDeck.gg tournaments endpoint.
//!
//! This module provides the `TopDeckClient` struct which performs the single
//! POST used to fetch recent EDH tournaments. There is no retry and no
//! explicit timeout: one failure fails the whole request.

use futures::future::BoxFuture;
use reqwest::{header, Client};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Default upstream endpoint
pub const DEFAULT_API_URL: &str = "https://topdeck.gg/api/v2/tournaments";

/// Number of days of tournaments to request
const RECENT_WINDOW_DAYS: u32 = 14;

const GAME: &str = "Magic: The Gathering";

const FORMAT: &str = "EDH";

/// Smallest tournament the upstream should return
const PARTICIPANT_MIN: u32 = 8;

const TOURNAMENT_COLUMNS: [&str; 4] = ["name", "wins", "losses", "participants"];

const PLAYER_FIELDS: [&str; 4] = ["name", "wins", "losses", "deckObj"];

/// Request body for `POST /api/v2/tournaments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentQuery {
    pub last: u32,
    pub game: String,
    pub format: String,
    pub columns: Vec<String>,
    pub players: Vec<String>,
    pub rounds: bool,
    pub participant_min: u32,
}

impl TournamentQuery {
    /// The fixed query this proxy always sends.
    pub fn recent_edh() -> Self {
        Self {
            last: RECENT_WINDOW_DAYS,
            game: GAME.to_string(),
            format: FORMAT.to_string(),
            columns: TOURNAMENT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            players: PLAYER_FIELDS.iter().map(|p| p.to_string()).collect(),
            rounds: false,
            participant_min: PARTICIPANT_MIN,
        }
    }
}

/// Anything that can produce the raw tournaments payload.
///
/// The payload is returned undecoded beyond JSON: it is expected to be a
/// sequence of tournament objects but callers must not rely on that.
pub trait TournamentSource: Send + Sync {
    fn fetch_tournaments(&self) -> BoxFuture<'_, Result<Value, ApiError>>;
}

/// API client for TopDeck.gg.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct TopDeckClient {
    client: Client,
    url: String,
    api_key: Option<String>,
    query: TournamentQuery,
}

impl TopDeckClient {
    /// Create a new client for the given endpoint URL.
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            api_key,
            query: TournamentQuery::recent_edh(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "TopDeck API returned an error");
            Err(ApiError::from_status(status, body))
        }
    }

    /// POST the tournament query and decode the JSON body.
    pub async fn post_tournaments(&self) -> Result<Value, ApiError> {
        debug!(url = %self.url, "Sending tournaments query");

        let response = self
            .client
            .post(&self.url)
            .header(header::AUTHORIZATION, self.api_key.as_deref().unwrap_or(""))
            .json(&self.query)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl TournamentSource for TopDeckClient {
    fn fetch_tournaments(&self) -> BoxFuture<'_, Result<Value, ApiError>> {
        Box::pin(self.post_tournaments())
    }
}
