//! HTTP API for the travel guide.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;

use crate::error::GuideError;
use crate::guide::TravelGuide;
use crate::models::{TravelGuideResult, TravelQuery};

/// Inbound travel query with every field optional, so that missing fields
/// surface as the documented 400 response instead of a deserialization
/// error from the extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelGuideRequest {
    pub place: Option<String>,
    pub members: Option<u32>,
    pub budget: Option<u64>,
    #[serde(default)]
    pub food_included: bool,
}

impl TravelGuideRequest {
    /// Collapse absent fields to their zero values; validation rejects those.
    #[must_use]
    pub fn into_query(self) -> TravelQuery {
        TravelQuery {
            place: self.place.unwrap_or_default(),
            members: self.members.unwrap_or(0),
            budget: self.budget.unwrap_or(0),
            food_included: self.food_included,
        }
    }
}

pub fn router(guide: Arc<TravelGuide>) -> Router {
    Router::new()
        .route("/travel-guide", post(travel_guide))
        .with_state(guide)
}

async fn travel_guide(
    State(guide): State<Arc<TravelGuide>>,
    Json(request): Json<TravelGuideRequest>,
) -> Result<Json<TravelGuideResult>, GuideError> {
    let query = request.into_query();
    let result = guide.plan(&query).await?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_collapse_to_zero_values() {
        let request = TravelGuideRequest {
            place: None,
            members: None,
            budget: None,
            food_included: false,
        };

        let query = request.into_query();
        assert!(query.place.is_empty());
        assert_eq!(query.members, 0);
        assert_eq!(query.budget, 0);
        assert!(query.validate().is_err());
    }
}
