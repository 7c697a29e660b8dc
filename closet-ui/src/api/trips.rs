//! Trip CRUD and packing list handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use closet_common::db::models::{Outfit, Trip};
use closet_common::db::{outfits, trips};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::parse_date_param;
use crate::error::{ApiError, ApiResult};
use crate::travel::{outfits_for_trip, packing_list};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTripRequest {
    pub name: String,
    /// YYYY-MM-DD
    pub start_date: String,
    /// YYYY-MM-DD, inclusive
    pub end_date: String,
    pub location_name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTripRequest {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location_name: Option<String>,
    /// Double-option: absent = keep, null = clear the coordinate
    #[serde(default, with = "crate::api::double_option")]
    pub latitude: Option<Option<f64>>,
    #[serde(default, with = "crate::api::double_option")]
    pub longitude: Option<Option<f64>>,
}

/// Trip with its attached outfits and packing list
#[derive(Debug, Serialize)]
pub struct TripDetail {
    #[serde(flatten)]
    pub trip: Trip,
    pub outfits: Vec<Outfit>,
    pub packing_list: Vec<Uuid>,
}

/// GET /api/trips
pub async fn list_trips(State(state): State<AppState>) -> ApiResult<Json<Vec<Trip>>> {
    let all = trips::list_trips(&state.db).await?;
    Ok(Json(all))
}

/// POST /api/trips
pub async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> ApiResult<(StatusCode, Json<Trip>)> {
    let trip = Trip {
        id: Uuid::new_v4(),
        name: request.name.trim().to_string(),
        start_date: parse_date_param(&request.start_date)?,
        end_date: parse_date_param(&request.end_date)?,
        location_name: request.location_name.trim().to_string(),
        latitude: request.latitude,
        longitude: request.longitude,
    };

    trips::insert_trip(&state.db, &trip).await?;
    tracing::info!(trip_id = %trip.id, name = %trip.name, "Created trip");

    Ok((StatusCode::CREATED, Json(trip)))
}

/// GET /api/trips/:id
pub async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TripDetail>> {
    let trip = trips::get_trip(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Trip {}", id)))?;

    let all_outfits = outfits::list_outfits(&state.db).await?;
    let attached: Vec<Outfit> = outfits_for_trip(&all_outfits, id).into_iter().cloned().collect();
    let packing = packing_list(&all_outfits, id);

    Ok(Json(TripDetail {
        trip,
        outfits: attached,
        packing_list: packing,
    }))
}

/// PATCH /api/trips/:id
pub async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripRequest>,
) -> ApiResult<Json<Trip>> {
    let mut trip = trips::get_trip(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Trip {}", id)))?;

    if let Some(name) = request.name {
        trip.name = name.trim().to_string();
    }
    if let Some(start) = request.start_date {
        trip.start_date = parse_date_param(&start)?;
    }
    if let Some(end) = request.end_date {
        trip.end_date = parse_date_param(&end)?;
    }
    if let Some(location) = request.location_name {
        trip.location_name = location.trim().to_string();
    }
    if let Some(latitude) = request.latitude {
        trip.latitude = latitude;
    }
    if let Some(longitude) = request.longitude {
        trip.longitude = longitude;
    }

    if !trips::update_trip(&state.db, &trip).await? {
        return Err(ApiError::NotFound(format!("Trip {}", id)));
    }
    tracing::info!(trip_id = %id, "Updated trip");

    Ok(Json(trip))
}

/// DELETE /api/trips/:id
///
/// Outfits attached to the trip keep their reference; reads treat the
/// missing trip as "no trip".
pub async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if !trips::delete_trip(&state.db, id).await? {
        return Err(ApiError::NotFound(format!("Trip {}", id)));
    }
    tracing::info!(trip_id = %id, "Deleted trip");
    Ok(StatusCode::NO_CONTENT)
}
