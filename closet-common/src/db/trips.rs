//! Trip database queries

use crate::db::models::Trip;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

fn trip_from_row(row: &SqliteRow) -> Trip {
    Trip {
        id: row
            .get::<String, _>("guid")
            .parse::<Uuid>()
            .unwrap_or_else(|_| Uuid::nil()),
        name: row.get("name"),
        start_date: row.get::<DateTime<Utc>, _>("start_date"),
        end_date: row.get::<DateTime<Utc>, _>("end_date"),
        location_name: row.get("location_name"),
        latitude: row.get("latitude"),
        longitude: row.get("longitude"),
    }
}

/// Validate trip fields shared by insert and update
fn validate_trip(trip: &Trip) -> Result<()> {
    if trip.name.trim().is_empty() {
        return Err(Error::InvalidInput("Trip name must not be empty".to_string()));
    }
    if trip.location_name.trim().is_empty() {
        return Err(Error::InvalidInput("Trip location must not be empty".to_string()));
    }
    if trip.end_date < trip.start_date {
        return Err(Error::InvalidInput(
            "Trip end date must not precede start date".to_string(),
        ));
    }
    Ok(())
}

/// Insert a new trip
pub async fn insert_trip(pool: &SqlitePool, trip: &Trip) -> Result<()> {
    validate_trip(trip)?;

    sqlx::query(
        r#"
        INSERT INTO trips (guid, name, start_date, end_date, location_name, latitude, longitude)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(trip.id.to_string())
    .bind(&trip.name)
    .bind(trip.start_date)
    .bind(trip.end_date)
    .bind(&trip.location_name)
    .bind(trip.latitude)
    .bind(trip.longitude)
    .execute(pool)
    .await?;

    Ok(())
}

/// Update an existing trip
pub async fn update_trip(pool: &SqlitePool, trip: &Trip) -> Result<bool> {
    validate_trip(trip)?;

    let result = sqlx::query(
        r#"
        UPDATE trips
        SET name = ?, start_date = ?, end_date = ?, location_name = ?,
            latitude = ?, longitude = ?, updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&trip.name)
    .bind(trip.start_date)
    .bind(trip.end_date)
    .bind(&trip.location_name)
    .bind(trip.latitude)
    .bind(trip.longitude)
    .bind(trip.id.to_string())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a trip
///
/// Outfits referencing it keep their trip id; the dangling reference is
/// read as "no trip" everywhere.
pub async fn delete_trip(pool: &SqlitePool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM trips WHERE guid = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Get a single trip by id; missing rows resolve to None
pub async fn get_trip(pool: &SqlitePool, id: Uuid) -> Result<Option<Trip>> {
    let row = sqlx::query("SELECT * FROM trips WHERE guid = ?")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(trip_from_row))
}

/// List all trips in insertion order
pub async fn list_trips(pool: &SqlitePool) -> Result<Vec<Trip>> {
    let rows = sqlx::query("SELECT * FROM trips ORDER BY created_at, guid")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(trip_from_row).collect())
}
