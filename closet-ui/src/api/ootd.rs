//! Outfit-of-the-day handler
//!
//! One screen's worth of data for a calendar day: the outfits dated that
//! day, the trip whose range covers it, and (when the trip has
//! coordinates) the day's forecast. Weather is fetched under the
//! latest-request-wins counter and degrades to a message on failure.

use axum::{
    extract::{Query, State},
    Json,
};
use closet_common::db::models::{Outfit, Trip};
use closet_common::db::{outfits, trips};
use serde::{Deserialize, Serialize};

use crate::api::parse_date_param;
use crate::error::ApiResult;
use crate::services::weather::WeatherSummary;
use crate::travel::{active_trip, outfits_for_date};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct OotdQuery {
    /// YYYY-MM-DD; defaults to today
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OotdResponse {
    pub date: String,
    pub outfits: Vec<Outfit>,
    pub active_trip: Option<Trip>,
    pub weather: Option<WeatherSummary>,
    /// Set when a forecast was expected but unavailable
    pub weather_message: Option<String>,
}

/// GET /api/ootd?date=
pub async fn get_ootd(
    State(state): State<AppState>,
    Query(query): Query<OotdQuery>,
) -> ApiResult<Json<OotdResponse>> {
    let date = match query.date.as_deref() {
        Some(value) => parse_date_param(value)?,
        None => closet_common::time::now(),
    };

    let all_outfits = outfits::list_outfits(&state.db).await?;
    let all_trips = trips::list_trips(&state.db).await?;

    let day_outfits: Vec<Outfit> = outfits_for_date(&all_outfits, date)
        .into_iter()
        .cloned()
        .collect();
    let trip = active_trip(&all_trips, date).cloned();

    let (weather, weather_message) = match trip.as_ref() {
        Some(trip) => match (trip.latitude, trip.longitude) {
            (Some(lat), Some(lon)) => {
                let generation = state.weather_gen.begin();
                match state.weather.daily_forecast(lat, lon, date).await {
                    // A newer request owns the screen now; drop this result
                    _ if !state.weather_gen.is_current(generation) => (None, None),
                    Ok(summary) => (Some(summary), None),
                    Err(err) => {
                        tracing::warn!(error = %err, "Weather lookup failed");
                        (None, Some("Weather unavailable".to_string()))
                    }
                }
            }
            _ => (None, None),
        },
        None => (None, None),
    };

    Ok(Json(OotdResponse {
        date: date.date_naive().format("%Y-%m-%d").to_string(),
        outfits: day_outfits,
        active_trip: trip,
        weather,
        weather_message,
    }))
}
