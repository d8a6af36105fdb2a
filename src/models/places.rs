//! Nearby tourist attractions.

use serde::Serialize;

/// A nearby attraction with a resolved image.
///
/// Attractions whose image lookup came back empty never reach the client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterest {
    pub name: String,
    pub image_url: String,
}
