//! Outfit database queries
//!
//! The layering sequence lives in the `outfit_items` link table ordered by
//! `position`; saving an outfit rewrites its rows atomically so the stored
//! order always matches the in-memory sequence.

use crate::catalog::FootStyle;
use crate::db::models::Outfit;
use crate::Result;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

fn outfit_from_row(row: &SqliteRow, item_ids: Vec<Uuid>) -> Outfit {
    let id = row
        .get::<String, _>("guid")
        .parse::<Uuid>()
        .unwrap_or_else(|_| Uuid::nil());

    let tags: Vec<String> = row
        .get::<Option<String>, _>("tags")
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default();

    let trip_id = row
        .get::<Option<String>, _>("trip_guid")
        .and_then(|s| s.parse::<Uuid>().ok());

    let foot_style = FootStyle::from_db_string(&row.get::<String, _>("foot_style"))
        .unwrap_or_default();

    Outfit {
        id,
        title: row.get("title"),
        item_ids,
        date: row.get::<Option<DateTime<Utc>>, _>("date"),
        tags,
        trip_id,
        foot_style,
        hair_asset: row.get("hair_asset"),
    }
}

async fn load_item_ids(pool: &SqlitePool, outfit_id: Uuid) -> Result<Vec<Uuid>> {
    let rows = sqlx::query(
        "SELECT item_guid FROM outfit_items WHERE outfit_guid = ? ORDER BY position",
    )
    .bind(outfit_id.to_string())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .filter_map(|r| r.get::<String, _>("item_guid").parse::<Uuid>().ok())
        .collect())
}

/// Insert a new outfit together with its layering sequence
pub async fn insert_outfit(pool: &SqlitePool, outfit: &Outfit) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO outfits (guid, title, date, tags, trip_guid, foot_style, hair_asset)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(outfit.id.to_string())
    .bind(&outfit.title)
    .bind(outfit.date)
    .bind(serde_json::to_string(&outfit.tags).map_err(|e| crate::Error::Internal(e.to_string()))?)
    .bind(outfit.trip_id.map(|t| t.to_string()))
    .bind(outfit.foot_style.to_db_string())
    .bind(&outfit.hair_asset)
    .execute(&mut *tx)
    .await?;

    for (position, item_id) in outfit.item_ids.iter().enumerate() {
        sqlx::query(
            "INSERT INTO outfit_items (outfit_guid, position, item_guid) VALUES (?, ?, ?)",
        )
        .bind(outfit.id.to_string())
        .bind(position as i64)
        .bind(item_id.to_string())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}

/// Update an outfit in place, replacing its layering sequence
pub async fn update_outfit(pool: &SqlitePool, outfit: &Outfit) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE outfits
        SET title = ?, date = ?, tags = ?, trip_guid = ?, foot_style = ?,
            hair_asset = ?, updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&outfit.title)
    .bind(outfit.date)
    .bind(serde_json::to_string(&outfit.tags).map_err(|e| crate::Error::Internal(e.to_string()))?)
    .bind(outfit.trip_id.map(|t| t.to_string()))
    .bind(outfit.foot_style.to_db_string())
    .bind(&outfit.hair_asset)
    .bind(outfit.id.to_string())
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    sqlx::query("DELETE FROM outfit_items WHERE outfit_guid = ?")
        .bind(outfit.id.to_string())
        .execute(&mut *tx)
        .await?;

    for (position, item_id) in outfit.item_ids.iter().enumerate() {
        sqlx::query(
            "INSERT INTO outfit_items (outfit_guid, position, item_guid) VALUES (?, ?, ?)",
        )
        .bind(outfit.id.to_string())
        .bind(position as i64)
        .bind(item_id.to_string())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(true)
}

/// Delete an outfit; the link table rows cascade
pub async fn delete_outfit(pool: &SqlitePool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM outfits WHERE guid = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Get a single outfit with its ordered layering sequence
pub async fn get_outfit(pool: &SqlitePool, id: Uuid) -> Result<Option<Outfit>> {
    let row = sqlx::query("SELECT * FROM outfits WHERE guid = ?")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => {
            let item_ids = load_item_ids(pool, id).await?;
            Ok(Some(outfit_from_row(&row, item_ids)))
        }
        None => Ok(None),
    }
}

/// List all saved outfits in insertion order
pub async fn list_outfits(pool: &SqlitePool) -> Result<Vec<Outfit>> {
    let rows = sqlx::query("SELECT * FROM outfits ORDER BY created_at, guid")
        .fetch_all(pool)
        .await?;

    let mut outfits = Vec::with_capacity(rows.len());
    for row in &rows {
        let id = row
            .get::<String, _>("guid")
            .parse::<Uuid>()
            .unwrap_or_else(|_| Uuid::nil());
        let item_ids = load_item_ids(pool, id).await?;
        outfits.push(outfit_from_row(row, item_ids));
    }

    Ok(outfits)
}
