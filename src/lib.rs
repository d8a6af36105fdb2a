//! `TravelGuide` - AI-assisted travel guide backend
//!
//! Accepts one travel query (place, party size, budget, food preference) and
//! fans it out to a generative-text oracle for hotel suggestions plus
//! geocoding, nearby-attraction, image and weather providers, merging
//! everything into a single JSON response for the browser client.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;

pub mod api;
pub mod config;
pub mod error;
pub mod guide;
pub mod models;
pub mod normalizer;
pub mod providers;
pub mod web;

// Re-export core types for public API
pub use config::GuideConfig;
pub use error::GuideError;
pub use guide::TravelGuide;
pub use models::{
    HotelOffer, HotelPrice, Location, PointOfInterest, TravelGuideResult, TravelQuery,
    WeatherSnapshot,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GuideError>;

/// Shared HTTP client for all outbound provider calls.
pub static API_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("TravelGuide/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
