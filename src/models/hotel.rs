//! Hotel suggestions as returned to the client.

use serde::{Deserialize, Serialize};

/// Price of a stay with and without meals included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelPrice {
    pub with_food: f64,
    pub without_food: f64,
}

/// A single hotel suggestion after normalization.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelOffer {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub price: HotelPrice,
    pub food_included: bool,
    /// Always derived locally from `name` and `location`, never taken from
    /// the oracle.
    pub map_link: String,
}
