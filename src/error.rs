//! Error types and HTTP mapping for the travel guide service

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Main error type for the travel guide service
#[derive(Error, Debug)]
pub enum GuideError {
    /// Required query fields missing or empty; detected before any outbound call
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Oracle text did not parse into the expected hotel document
    #[error("Malformed oracle output: {0}")]
    MalformedOracleOutput(String),

    /// Transport failure or non-success status from an external provider
    #[error("{provider} unavailable: {message}")]
    UpstreamUnavailable {
        provider: &'static str,
        message: String,
    },
}

impl GuideError {
    /// Create a new upstream error for the given provider
    pub fn upstream<S: Into<String>>(provider: &'static str, message: S) -> Self {
        Self::UpstreamUnavailable {
            provider,
            message: message.into(),
        }
    }

    /// Message returned to the client. Internal detail stays in the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            GuideError::InvalidRequest(_) => "Missing required fields",
            GuideError::MalformedOracleOutput(_) => "Invalid JSON format from AI response",
            GuideError::UpstreamUnavailable { .. } => "Failed to fetch hotel recommendations",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            GuideError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GuideError::MalformedOracleOutput(_) | GuideError::UpstreamUnavailable { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GuideError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            error!("request failed: {self}");
        }
        (self.status(), Json(json!({ "error": self.user_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let upstream_err = GuideError::upstream("gemini", "connection refused");
        assert!(matches!(
            upstream_err,
            GuideError::UpstreamUnavailable {
                provider: "gemini",
                ..
            }
        ));
    }

    #[test]
    fn test_user_messages_hide_internals() {
        let parse_err = GuideError::MalformedOracleOutput("expected value at line 1".to_string());
        assert_eq!(parse_err.user_message(), "Invalid JSON format from AI response");

        let upstream_err = GuideError::upstream("openweathermap", "HTTP 503");
        assert_eq!(
            upstream_err.user_message(),
            "Failed to fetch hotel recommendations"
        );
    }

    #[test]
    fn test_status_mapping() {
        let invalid = GuideError::InvalidRequest("Missing required fields".to_string());
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let malformed = GuideError::MalformedOracleOutput("not json".to_string());
        assert_eq!(
            malformed.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
