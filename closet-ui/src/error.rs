//! Error types for closet-ui

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::geocoding::GeocodingError;
use crate::services::weather::WeatherError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Upstream collaborator failure (502)
    #[error("Geocoding error: {0}")]
    Geocoding(#[from] GeocodingError),

    /// Upstream collaborator failure (502)
    #[error("Weather error: {0}")]
    Weather(#[from] WeatherError),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),

    /// closet-common error
    #[error("Common error: {0}")]
    Common(closet_common::Error),
}

impl From<closet_common::Error> for ApiError {
    fn from(err: closet_common::Error) -> Self {
        // Validation and lookup failures from the shared layer keep their
        // client-facing status codes
        match err {
            closet_common::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            closet_common::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Common(other),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Common(closet_common::Error::Database(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Geocoding(ref err) => {
                (StatusCode::BAD_GATEWAY, "GEOCODING_ERROR", err.to_string())
            }
            ApiError::Weather(ref err) => {
                (StatusCode::BAD_GATEWAY, "WEATHER_ERROR", err.to_string())
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Other(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
            ApiError::Common(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMMON_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
