//! Adapters for the external services the guide fans out to.
//!
//! Each adapter makes one best-effort request per call: no retries, no
//! caching. Failures are reported as [`GuideError::UpstreamUnavailable`];
//! the orchestrator decides whether a failing branch is fatal or degrades
//! the corresponding response field.

pub mod gemini;
pub mod geocoding;
pub mod places;
pub mod weather;

use async_trait::async_trait;

use crate::Result;
use crate::models::{Location, TravelQuery, WeatherSnapshot};

pub use gemini::GeminiClient;
pub use geocoding::OpenMeteoGeocoder;
pub use places::WikipediaClient;
pub use weather::OpenWeatherClient;

/// Text-generation oracle producing raw hotel suggestions.
#[async_trait]
pub trait HotelOracle: Send + Sync {
    /// Return the oracle's raw text output for the query.
    async fn suggest_hotels(&self, query: &TravelQuery) -> Result<String>;
}

/// Resolves a place name to zero or one location.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, place: &str) -> Result<Option<Location>>;
}

/// Finds named points of interest near a location, ordered by distance.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn nearby(&self, location: &Location, radius_m: u32, limit: usize)
    -> Result<Vec<String>>;
}

/// Looks up a representative image for a place title.
#[async_trait]
pub trait ImageLookup: Send + Sync {
    async fn image_for(&self, title: &str) -> Result<Option<String>>;
}

/// Current weather conditions by place name.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, place: &str) -> Result<WeatherSnapshot>;
}
