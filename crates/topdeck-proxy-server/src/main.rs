//! topdeck-proxy - serves recent cEDH tournaments from TopDeck.gg.
//!
//! A small HTTP proxy: it fetches the last two weeks of EDH tournaments,
//! enriches and filters them, and caches the result for five minutes.

mod routes;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use topdeck_proxy_core::{Config, SystemClock, TopDeckClient, TournamentService};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::from_env()?;
    let client = TopDeckClient::new(config.api_url.clone(), config.api_key.clone());
    info!(
        api_key_loaded = client.has_api_key(),
        upstream = %config.api_url,
        "Configuration loaded"
    );

    let service = Arc::new(TournamentService::new(Arc::new(client), Arc::new(SystemClock)));
    let app = routes::build_router(service);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Proxy server running on http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Proxy server shutting down");
    Ok(())
}
