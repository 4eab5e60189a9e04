//! Error types for the country cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned to clients when the upstream provider fails.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch countries data";

// == Country Error Enum ==
/// Unified error type for the country cache service.
///
/// Every variant is terminal for the request that produced it; nothing is
/// retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountryError {
    /// Malformed pagination input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Well-formed query that matched zero records
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure or non-success status from the upstream provider
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CountryError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CountryError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),
            CountryError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            // Detail was logged where the fetch failed
            CountryError::UpstreamUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UPSTREAM_FAILURE_MESSAGE.to_string(),
            ),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the country cache service.
pub type Result<T> = std::result::Result<T, CountryError>;
