//! The aggregated response for one travel query.

use serde::Serialize;

use super::{HotelOffer, PointOfInterest, WeatherSnapshot};

/// Everything the client renders for one query.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelGuideResult {
    pub hotels: Vec<HotelOffer>,
    /// Absent when the weather branch degraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
    pub top_tourist_places: Vec<PointOfInterest>,
}
