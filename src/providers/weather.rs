//! Current weather through the OpenWeatherMap API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::WeatherProvider;
use crate::API_CLIENT;
use crate::Result;
use crate::error::GuideError;
use crate::models::WeatherSnapshot;

const PROVIDER: &str = "openweathermap";
const BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// OpenWeatherMap current-weather client
pub struct OpenWeatherClient {
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainData,
    #[serde(default)]
    weather: Vec<ConditionData>,
}

#[derive(Debug, Deserialize)]
struct MainData {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionData {
    description: String,
}

impl OpenWeatherClient {
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, place: &str) -> Result<WeatherSnapshot> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GuideError::upstream(PROVIDER, "OPENWEATHER_API_KEY not configured"))?;

        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(place),
            api_key
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
                format!("weather returned {status}"),
            ));
        }

        let parsed: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| GuideError::upstream(PROVIDER, format!("invalid response body: {e}")))?;

        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|condition| condition.description)
            .unwrap_or_default();

        debug!(
            "Current weather in '{}': {:.1}°C, {}",
            place, parsed.main.temp, description
        );

        Ok(WeatherSnapshot {
            temp: parsed.main.temp,
            description,
            humidity: parsed.main.humidity,
        })
    }
}
