//! Current weather conditions for the queried place.

use serde::Serialize;

/// One weather snapshot per query; no history is retained.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius
    pub temp: f64,
    /// Human-readable description of conditions
    pub description: String,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
}
