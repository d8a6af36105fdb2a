//! Gemini text-generation client, the hotel oracle.
//!
//! The oracle is prompted for pure JSON but routinely wraps its answer in
//! markdown fences or drifts from the schema; the normalizer deals with
//! that. This adapter only moves the prompt out and the raw text back.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::HotelOracle;
use crate::API_CLIENT;
use crate::Result;
use crate::error::GuideError;
use crate::models::TravelQuery;

const PROVIDER: &str = "gemini";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";
const MODEL: &str = "gemini-1.5-pro";

/// Gemini `generateContent` API client
pub struct GeminiClient {
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiClient {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Natural-language prompt with an explicit example schema, so the model
    /// has no excuse to invent field names.
    fn prompt(query: &TravelQuery) -> String {
        format!(
            r#"Suggest at least 6 hotels in {place} for {members} people within a budget of ₹{budget}.
Each hotel should include:
- Hotel name
- Location
- Contact phone number
- Pricing (with/without food)
- Food availability (true/false)

Ensure the response is **pure JSON** with no extra text. Example:
{{
    "hotels": [
        {{
            "name": "Hotel XYZ",
            "location": "Place ABC",
            "phone": "+91 6374733801",
            "price": {{ "withFood": 5000, "withoutFood": 4200 }},
            "foodIncluded": {food}
        }}
    ]
}}"#,
            place = query.place,
            members = query.members,
            budget = query.budget,
            food = query.food_included,
        )
    }
}

#[async_trait]
impl HotelOracle for GeminiClient {
    async fn suggest_hotels(&self, query: &TravelQuery) -> Result<String> {
        info!("Requesting hotel suggestions for '{}'", query.place);

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, MODEL, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt(query),
                }],
            }],
        };

        let response = API_CLIENT
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GuideError::upstream(PROVIDER, format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GuideError::upstream(
                PROVIDER,
                format!("generateContent returned {status}"),
            ));
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GuideError::upstream(PROVIDER, format!("invalid response body: {e}")))?;

        let text = generated
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| GuideError::upstream(PROVIDER, "empty response"))?;

        debug!("Oracle returned {} characters", text.len());
        Ok(text)
    }
}
