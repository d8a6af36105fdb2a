//! Turns the oracle's raw text into a validated hotel list.
//!
//! The oracle is asked for pure JSON but tends to wrap it in markdown fences
//! and to invent map links. Parsing is strict: fences are stripped, the
//! remaining text must be a JSON document with a `hotels` array of at least
//! the configured minimum, and every map link is recomputed locally.

use serde::Deserialize;

use crate::Result;
use crate::error::GuideError;
use crate::models::{HotelOffer, HotelPrice};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

#[derive(Debug, Deserialize)]
struct HotelsDocument {
    hotels: Vec<RawHotel>,
}

/// One hotel entry as produced by the oracle. Any `mapLink` the oracle emits
/// is ignored during deserialization and recomputed from name and location.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHotel {
    name: String,
    location: String,
    phone: String,
    price: HotelPrice,
    food_included: bool,
}

impl RawHotel {
    fn into_offer(self) -> HotelOffer {
        let map_link = map_search_link(&self.name, &self.location);
        HotelOffer {
            name: self.name,
            location: self.location,
            phone: self.phone,
            price: self.price,
            food_included: self.food_included,
            map_link,
        }
    }
}

/// Parse the oracle output into hotel offers, enforcing the minimum count.
pub fn parse_hotels(raw: &str, min_hotels: usize) -> Result<Vec<HotelOffer>> {
    let cleaned = strip_code_fences(raw);

    let document: HotelsDocument = serde_json::from_str(&cleaned)
        .map_err(|e| GuideError::MalformedOracleOutput(e.to_string()))?;

    if document.hotels.len() < min_hotels {
        return Err(GuideError::MalformedOracleOutput(format!(
            "expected at least {} hotels, got {}",
            min_hotels,
            document.hotels.len()
        )));
    }

    Ok(document.hotels.into_iter().map(RawHotel::into_offer).collect())
}

/// Map-search link for a hotel, derived from its name and location.
#[must_use]
pub fn map_search_link(name: &str, location: &str) -> String {
    format!(
        "{}{}",
        MAPS_SEARCH_URL,
        urlencoding::encode(&format!("{name}, {location}"))
    )
}

fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}
