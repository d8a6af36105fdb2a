//! Travel guide orchestrator.
//!
//! One entry point: validate the query, fan out to the providers, merge the
//! branches into a single response. The hotel branch is the deliverable and
//! its failure aborts the whole request; geocoding, place search, image
//! lookup and weather are enrichments whose failures degrade the
//! corresponding field to empty.

use std::future::Future;
use std::sync::Arc;

use futures::future;
use tracing::{debug, warn};

use crate::Result;
use crate::config::GuideConfig;
use crate::models::{
    HotelOffer, PointOfInterest, TravelGuideResult, TravelQuery, WeatherSnapshot,
};
use crate::normalizer;
use crate::providers::{
    GeminiClient, Geocoder, HotelOracle, ImageLookup, OpenMeteoGeocoder, OpenWeatherClient,
    PlaceSearch, WeatherProvider, WikipediaClient,
};

/// Upper bound on the tourist-place list.
const MAX_TOURIST_PLACES: usize = 5;
/// Search radius for nearby attractions, in meters.
const SEARCH_RADIUS_M: u32 = 10_000;

/// The single entry point for resolving travel queries.
pub struct TravelGuide {
    oracle: Arc<dyn HotelOracle>,
    geocoder: Arc<dyn Geocoder>,
    places: Arc<dyn PlaceSearch>,
    images: Arc<dyn ImageLookup>,
    weather: Arc<dyn WeatherProvider>,
    min_hotels: usize,
}

impl TravelGuide {
    /// Wire up the production providers from configuration.
    #[must_use]
    pub fn from_config(config: &GuideConfig) -> Self {
        let wikipedia = Arc::new(WikipediaClient::new());
        Self {
            oracle: Arc::new(GeminiClient::new(config.gemini_api_key.clone())),
            geocoder: Arc::new(OpenMeteoGeocoder::new()),
            places: wikipedia.clone(),
            images: wikipedia,
            weather: Arc::new(OpenWeatherClient::new(config.openweather_api_key.clone())),
            min_hotels: config.min_hotels,
        }
    }

    /// Construct from explicit providers.
    #[must_use]
    pub fn new(
        oracle: Arc<dyn HotelOracle>,
        geocoder: Arc<dyn Geocoder>,
        places: Arc<dyn PlaceSearch>,
        images: Arc<dyn ImageLookup>,
        weather: Arc<dyn WeatherProvider>,
        min_hotels: usize,
    ) -> Self {
        Self {
            oracle,
            geocoder,
            places,
            images,
            weather,
            min_hotels,
        }
    }

    /// Resolve one travel query into the aggregated guide response.
    pub async fn plan(&self, query: &TravelQuery) -> Result<TravelGuideResult> {
        query.validate()?;

        let hotels = self.fetch_hotels(query);
        let weather = self.fetch_weather(&query.place);
        let tourist_places = self.fetch_tourist_places(&query.place);

        let (hotels, weather, top_tourist_places) =
            tokio::try_join!(hotels, weather, tourist_places)?;

        Ok(TravelGuideResult {
            hotels,
            weather,
            top_tourist_places,
        })
    }

    /// Mandatory branch: oracle output through the normalizer.
    async fn fetch_hotels(&self, query: &TravelQuery) -> Result<Vec<HotelOffer>> {
        let raw = self.oracle.suggest_hotels(query).await?;
        normalizer::parse_hotels(&raw, self.min_hotels)
    }

    async fn fetch_weather(&self, place: &str) -> Result<Option<WeatherSnapshot>> {
        Ok(degrade("weather", self.weather.current(place)).await)
    }

    /// Geocode, search nearby attractions, then resolve their images
    /// concurrently. Every step degrades to an empty list on failure.
    async fn fetch_tourist_places(&self, place: &str) -> Result<Vec<PointOfInterest>> {
        let Some(location) = degrade("geocoding", self.geocoder.geocode(place)).await.flatten()
        else {
            return Ok(Vec::new());
        };
        debug!("Resolved '{}' to {}", place, location.format_coordinates());

        let titles = degrade(
            "place search",
            self.places.nearby(&location, SEARCH_RADIUS_M, MAX_TOURIST_PLACES),
        )
        .await
        .unwrap_or_default();

        let lookups = titles.into_iter().map(|title| async move {
            let image = degrade("image lookup", self.images.image_for(&title))
                .await
                .flatten();
            image.map(|image_url| PointOfInterest {
                name: title,
                image_url,
            })
        });

        // Attractions without a resolvable image are dropped from the list.
        Ok(future::join_all(lookups).await.into_iter().flatten().collect())
    }
}

/// Optional-branch policy: absorb the failure, log it, empty the field.
async fn degrade<T, F>(provider: &'static str, fut: F) -> Option<T>
where
    F: Future<Output = Result<T>>,
{
    match fut.await {
        Ok(value) => Some(value),
        Err(error) => {
            warn!("{provider} branch degraded: {error}");
            None
        }
    }
}
