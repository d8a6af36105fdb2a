//! Nearby attraction search and image lookup through the Wikipedia API.
//!
//! GeoSearch lists pages around a coordinate ordered by distance; PageImages
//! resolves zero or one thumbnail per title. Both endpoints are key-free.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{ImageLookup, PlaceSearch};
use crate::API_CLIENT;
use crate::Result;
use crate::error::GuideError;
use crate::models::Location;

const PROVIDER: &str = "wikipedia";
const BASE_URL: &str = "https://en.wikipedia.org/w/api.php";
const THUMBNAIL_SIZE: u32 = 500;

/// Wikipedia GeoSearch + PageImages client
pub struct WikipediaClient {
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GeoSearchResponse {
    query: Option<GeoSearchQuery>,
}

#[derive(Debug, Deserialize)]
struct GeoSearchQuery {
    #[serde(default)]
    geosearch: Vec<GeoSearchHit>,
}

#[derive(Debug, Deserialize)]
struct GeoSearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PageImagesResponse {
    query: Option<PageImagesQuery>,
}

#[derive(Debug, Deserialize)]
struct PageImagesQuery {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

impl WikipediaClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
        }
    }
}

impl Default for WikipediaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaceSearch for WikipediaClient {
    async fn nearby(
        &self,
        location: &Location,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<String>> {
        let coordinates = format!("{}|{}", location.latitude, location.longitude);
        let url = format!(
            "{}?action=query&list=geosearch&gscoord={}&gsradius={}&gslimit={}&format=json",
            self.base_url,
            urlencoding::encode(&coordinates),
            radius_m,
            limit
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
                format!("geosearch returned {status}"),
            ));
        }

        let parsed: GeoSearchResponse = response
            .json()
            .await
            .map_err(|e| GuideError::upstream(PROVIDER, format!("invalid response body: {e}")))?;

        let titles: Vec<String> = parsed
            .query
            .map(|query| query.geosearch.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default();

        debug!("Found {} places near {}", titles.len(), location.name);
        Ok(titles)
    }
}

#[async_trait]
impl ImageLookup for WikipediaClient {
    async fn image_for(&self, title: &str) -> Result<Option<String>> {
        let url = format!(
            "{}?action=query&prop=pageimages&format=json&pithumbsize={}&titles={}",
            self.base_url,
            THUMBNAIL_SIZE,
            urlencoding::encode(title)
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
                format!("pageimages returned {status}"),
            ));
        }

        let parsed: PageImagesResponse = response
            .json()
            .await
            .map_err(|e| GuideError::upstream(PROVIDER, format!("invalid response body: {e}")))?;

        let image = parsed
            .query
            .and_then(|query| query.pages.into_values().next())
            .and_then(|page| page.thumbnail)
            .map(|thumbnail| thumbnail.source);

        Ok(image)
    }
}
