//! Open-Meteo geocoding client
//!
//! Backs the trip-location search box: a free-text fragment yields
//! completion candidates, and a chosen candidate resolves to a display
//! name plus coordinates. Failures here are reported to the caller but
//! never take the app down.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const USER_AGENT: &str = "MyCloset/0.1.0";
const MAX_COMPLETIONS: usize = 8;

/// Geocoding client errors
#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// A place-completion candidate offered while the user types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceCompletion {
    /// Place name, e.g. "Paris"
    pub title: String,
    /// Disambiguating context, e.g. "Île-de-France, France"
    pub subtitle: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceCompletion {
    /// Display name stored on the trip: "City, Region", region omitted
    /// when the candidate has none
    pub fn display_name(&self) -> String {
        if self.subtitle.is_empty() {
            self.title.clone()
        } else {
            format!("{}, {}", self.title, self.subtitle)
        }
    }
}

/// A completion resolved into the fields a trip stores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&PlaceCompletion> for ResolvedPlace {
    fn from(completion: &PlaceCompletion) -> Self {
        Self {
            display_name: completion.display_name(),
            latitude: completion.latitude,
            longitude: completion.longitude,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    admin1: Option<String>,
    country: Option<String>,
}

impl GeocodingResult {
    fn subtitle(&self) -> String {
        match (self.admin1.as_deref(), self.country.as_deref()) {
            (Some(region), Some(country)) => format!("{}, {}", region, country),
            (Some(region), None) => region.to_string(),
            (None, Some(country)) => country.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Open-Meteo geocoding API client
pub struct GeocodingClient {
    http_client: reqwest::Client,
}

impl GeocodingClient {
    pub fn new() -> Result<Self, GeocodingError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GeocodingError::NetworkError(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// Search completions for a free-text fragment
    ///
    /// Blank fragments return no candidates without issuing a request.
    pub async fn search(&self, fragment: &str) -> Result<Vec<PlaceCompletion>, GeocodingError> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(fragment = %fragment, "Querying geocoding API");

        let response = self
            .http_client
            .get(GEOCODING_BASE_URL)
            .query(&[
                ("name", fragment),
                ("count", "8"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| GeocodingError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeocodingError::ApiError(status.as_u16(), error_text));
        }

        let parsed: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let completions: Vec<PlaceCompletion> = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .take(MAX_COMPLETIONS)
            .map(|result| {
                let subtitle = result.subtitle();
                PlaceCompletion {
                    title: result.name,
                    subtitle,
                    latitude: result.latitude,
                    longitude: result.longitude,
                }
            })
            .collect();

        tracing::debug!(count = completions.len(), "Geocoding completions retrieved");

        Ok(completions)
    }
}
