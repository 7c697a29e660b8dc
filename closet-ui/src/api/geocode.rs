//! Trip location search handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::services::geocoding::{PlaceCompletion, ResolvedPlace};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    /// Free-text place fragment as the user types
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub completions: Vec<PlaceCompletion>,
    /// False when a newer search superseded this one mid-flight
    pub current: bool,
}

/// GET /api/geocode?q=
///
/// Search-as-you-type: each call supersedes the previous one. A response
/// that lost the race comes back marked stale with no completions, so
/// the client never paints out-of-date candidates.
pub async fn search_places(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> ApiResult<Json<GeocodeResponse>> {
    let generation = state.geocode_gen.begin();

    let completions = state.geocoding.search(&query.q).await?;

    if !state.geocode_gen.is_current(generation) {
        tracing::debug!(fragment = %query.q, "Geocode search superseded");
        return Ok(Json(GeocodeResponse {
            completions: Vec::new(),
            current: false,
        }));
    }

    Ok(Json(GeocodeResponse {
        completions,
        current: true,
    }))
}

/// POST /api/geocode/resolve
///
/// Turn a chosen completion into the display name and coordinates a
/// trip stores.
pub async fn resolve_place(Json(completion): Json<PlaceCompletion>) -> Json<ResolvedPlace> {
    Json(ResolvedPlace::from(&completion))
}
