//! Process configuration, read once at startup and passed to collaborators.

use std::env;

use anyhow::{Context, Result};

/// Default listening port, matching the original deployment.
const DEFAULT_PORT: u16 = 5000;

/// Default minimum number of hotels the oracle must return.
const DEFAULT_MIN_HOTELS: usize = 6;

/// Immutable configuration for the travel guide service.
#[derive(Debug, Clone)]
pub struct GuideConfig {
    /// API key for the text-generation oracle
    pub gemini_api_key: String,
    /// API key for the weather provider; the weather branch degrades when absent
    pub openweather_api_key: Option<String>,
    /// Listening port
    pub port: u16,
    /// Minimum acceptable hotel count from the oracle
    pub min_hotels: usize,
}

impl GuideConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key =
            env::var("GEMINI_API_KEY").context("Missing GEMINI_API_KEY env var")?;
        let openweather_api_key = env::var("OPENWEATHER_API_KEY").ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT is not a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        let min_hotels = match env::var("MIN_HOTELS") {
            Ok(raw) => raw.parse().context("MIN_HOTELS is not a valid count")?,
            Err(_) => DEFAULT_MIN_HOTELS,
        };

        Ok(Self {
            gemini_api_key,
            openweather_api_key,
            port,
            min_hotels,
        })
    }
}
