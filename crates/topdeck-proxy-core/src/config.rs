//! Application configuration management.
//!
//! Configuration comes from the process environment (a `.env` file is merged
//! in by the binary before this runs):
//!
//! - `API_KEY`: TopDeck.gg credential (optional)
//! - `PORT`: listen port, default 3001
//! - `TOPDECK_API_URL`: upstream endpoint, default the public API

use std::fmt;

use anyhow::{Context, Result};

use crate::api::DEFAULT_API_URL;

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub port: u16,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: non_empty("API_KEY"),
            port,
            api_url: non_empty("TOPDECK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

// Hand-written so the API key never ends up in logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .field("api_url", &self.api_url)
            .finish()
    }
}
