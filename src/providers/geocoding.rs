//! Geocoding through the `OpenMeteo` geocoding API (no API key required).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::Geocoder;
use crate::API_CLIENT;
use crate::Result;
use crate::error::GuideError;
use crate::models::Location;

const PROVIDER: &str = "open-meteo geocoding";
const BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1";

/// `OpenMeteo` geocoding client
pub struct OpenMeteoGeocoder {
    base_url: String,
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        match result.country {
            Some(country) => {
                Location::with_country(result.latitude, result.longitude, result.name, country)
            }
            None => Location::new(result.latitude, result.longitude, result.name),
        }
    }
}

impl OpenMeteoGeocoder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
        }
    }
}

impl Default for OpenMeteoGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn geocode(&self, place: &str) -> Result<Option<Location>> {
        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(place)
        );

        let response = API_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| GuideError::upstream(PROVIDER, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GuideError::upstream(
                PROVIDER,
                format!("search returned {status}"),
            ));
        }

        let parsed: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| GuideError::upstream(PROVIDER, format!("invalid response body: {e}")))?;

        let location = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(Location::from);

        match &location {
            Some(location) => {
                debug!("Geocoded '{}' to {}", place, location.format_coordinates());
            }
            None => debug!("No geocoding results for '{}'", place),
        }

        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_result_to_location() {
        let result = GeocodingResult {
            name: "Madurai".to_string(),
            latitude: 9.9252,
            longitude: 78.1198,
            country: Some("IN".to_string()),
        };

        let location: Location = result.into();
        assert_eq!(location.name, "Madurai");
        assert_eq!(location.latitude, 9.9252);
        assert_eq!(location.longitude, 78.1198);
        assert_eq!(location.country, Some("IN".to_string()));
    }
}
