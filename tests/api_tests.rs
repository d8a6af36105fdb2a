//! Router-level tests for the travel guide endpoint.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use travelguide::providers::{Geocoder, HotelOracle, ImageLookup, PlaceSearch, WeatherProvider};
use travelguide::{
    GuideError, Location, TravelGuide, TravelQuery, WeatherSnapshot, api,
};

struct StubOracle(Option<String>);

#[async_trait]
impl HotelOracle for StubOracle {
    async fn suggest_hotels(&self, _query: &TravelQuery) -> travelguide::Result<String> {
        self.0
            .clone()
            .ok_or_else(|| GuideError::upstream("gemini", "connection refused"))
    }
}

struct StubGeocoder;

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, _place: &str) -> travelguide::Result<Option<Location>> {
        Ok(Some(Location::with_country(
            9.9252,
            78.1198,
            "Madurai".to_string(),
            "IN".to_string(),
        )))
    }
}

struct StubPlaces;

#[async_trait]
impl PlaceSearch for StubPlaces {
    async fn nearby(
        &self,
        _location: &Location,
        _radius_m: u32,
        limit: usize,
    ) -> travelguide::Result<Vec<String>> {
        let titles = ["Meenakshi Amman Temple", "Gandhi Memorial Museum"];
        Ok(titles.iter().take(limit).map(|s| s.to_string()).collect())
    }
}

struct StubImages(HashMap<&'static str, &'static str>);

#[async_trait]
impl ImageLookup for StubImages {
    async fn image_for(&self, title: &str) -> travelguide::Result<Option<String>> {
        Ok(self.0.get(title).map(|url| url.to_string()))
    }
}

struct StubWeather(Option<WeatherSnapshot>);

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current(&self, _place: &str) -> travelguide::Result<WeatherSnapshot> {
        self.0
            .clone()
            .ok_or_else(|| GuideError::upstream("openweathermap", "connection refused"))
    }
}

fn oracle_payload(count: usize) -> String {
    let hotels: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "name": format!("Hotel {i}"),
                "location": "Madurai",
                "phone": format!("+91 63747338{i:02}"),
                "price": { "withFood": 5000 + i, "withoutFood": 4200 + i },
                "foodIncluded": true
            })
        })
        .collect();
    format!("```json\n{}\n```", json!({ "hotels": hotels }))
}

fn app(oracle: StubOracle, weather: StubWeather) -> Router {
    let guide = TravelGuide::new(
        Arc::new(oracle),
        Arc::new(StubGeocoder),
        Arc::new(StubPlaces),
        Arc::new(StubImages(HashMap::from([(
            "Meenakshi Amman Temple",
            "https://img.example/temple.jpg",
        )]))),
        Arc::new(weather),
        6,
    );
    api::router(Arc::new(guide))
}

fn happy_app() -> Router {
    app(
        StubOracle(Some(oracle_payload(6))),
        StubWeather(Some(WeatherSnapshot {
            temp: 31.2,
            description: "clear sky".to_string(),
            humidity: 55,
        })),
    )
}

async fn send(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/travel-guide")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn missing_fields_return_400() {
    let (status, body) = send(happy_app(), json!({ "place": "Madurai" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields" }));
}

#[tokio::test]
async fn zero_valued_fields_return_400() {
    let (status, body) = send(
        happy_app(),
        json!({ "place": "Madurai", "members": 0, "budget": 10000 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields" }));
}

#[tokio::test]
async fn success_envelope_uses_wire_names() {
    let (status, body) = send(
        happy_app(),
        json!({ "place": "Madurai", "members": 4, "budget": 10000, "foodIncluded": true }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let hotels = body["hotels"].as_array().unwrap();
    assert_eq!(hotels.len(), 6);
    for hotel in hotels {
        assert!(hotel["mapLink"].as_str().unwrap().starts_with(
            "https://www.google.com/maps/search/?api=1&query="
        ));
        assert!(hotel["price"]["withFood"].is_number());
        assert!(hotel["price"]["withoutFood"].is_number());
        assert!(hotel["foodIncluded"].as_bool().unwrap());
    }

    assert_eq!(body["weather"]["temp"], json!(31.2));
    assert_eq!(body["weather"]["description"], json!("clear sky"));
    assert_eq!(body["weather"]["humidity"], json!(55));

    // The museum has no image and is filtered out of the attraction list.
    let places = body["topTouristPlaces"].as_array().unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0]["name"], json!("Meenakshi Amman Temple"));
    assert_eq!(places[0]["imageUrl"], json!("https://img.example/temple.jpg"));
}

#[tokio::test]
async fn weather_failure_still_succeeds_without_weather_field() {
    let (status, body) = send(
        app(StubOracle(Some(oracle_payload(6))), StubWeather(None)),
        json!({ "place": "Madurai", "members": 4, "budget": 10000 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hotels"].as_array().unwrap().len(), 6);
    assert!(body.get("weather").is_none());
}

#[tokio::test]
async fn oracle_failure_returns_generic_server_error() {
    let (status, body) = send(
        app(
            StubOracle(None),
            StubWeather(Some(WeatherSnapshot {
                temp: 31.2,
                description: "clear sky".to_string(),
                humidity: 55,
            })),
        ),
        json!({ "place": "Madurai", "members": 4, "budget": 10000 }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch hotel recommendations" }));
}

#[tokio::test]
async fn malformed_oracle_output_returns_parse_error_message() {
    let (status, body) = send(
        app(
            StubOracle(Some("Here are some hotels I recommend!".to_string())),
            StubWeather(None),
        ),
        json!({ "place": "Madurai", "members": 4, "budget": 10000 }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Invalid JSON format from AI response" }));
}

#[tokio::test]
async fn short_hotel_list_never_yields_a_partial_response() {
    let (status, body) = send(
        app(StubOracle(Some(oracle_payload(4))), StubWeather(None)),
        json!({ "place": "Madurai", "members": 4, "budget": 10000 }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("hotels").is_none());
    assert_eq!(body, json!({ "error": "Invalid JSON format from AI response" }));
}
