//! HTTP routes.
//!
//! - `GET /health`: liveness
//! - `GET /api/tournaments`: processed tournaments, or 500 `{"error": ..}`
//!
//! CORS allows every origin on every route.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::error;

use topdeck_proxy_core::{ApiError, TournamentService};

pub type AppState = Arc<TournamentService>;

pub fn build_router(service: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/tournaments", get(tournaments))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn tournaments(State(service): State<AppState>) -> Result<Response, AppError> {
    let tournaments = service.tournaments().await?;
    Ok(Json(tournaments.as_slice()).into_response())
}

/// Any failure while serving tournaments; always a 500.
pub struct AppError(ApiError);

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(
            error = %self.0,
            upstream_status = ?self.0.status(),
            "Error in /api/tournaments"
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}
