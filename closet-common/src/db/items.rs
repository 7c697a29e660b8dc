//! Clothing item database queries
//!
//! UUIDs are stored as TEXT; tags and supported foot styles as JSON text
//! columns. Rows with unparseable enum values degrade instead of erroring:
//! an unknown category maps to "other", an unknown subcategory to none.

use crate::catalog::{ClothingCategory, ClothingSubcategory, FootStyle};
use crate::db::models::ClothingItem;
use crate::Result;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

fn item_from_row(row: &SqliteRow) -> ClothingItem {
    let id = row
        .get::<String, _>("guid")
        .parse::<Uuid>()
        .unwrap_or_else(|_| Uuid::nil());

    let category = ClothingCategory::from_db_string(&row.get::<String, _>("category"))
        .unwrap_or(ClothingCategory::Other);

    let subcategory = row
        .get::<Option<String>, _>("subcategory")
        .and_then(|s| ClothingSubcategory::from_db_string(&s));

    let tags: Vec<String> = row
        .get::<Option<String>, _>("tags")
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default();

    let supported_foot_styles: Option<Vec<FootStyle>> = row
        .get::<Option<String>, _>("supported_foot_styles")
        .and_then(|s| serde_json::from_str(&s).ok());

    ClothingItem {
        id,
        name: row.get("name"),
        category,
        subcategory,
        image_name: row.get("image_name"),
        image_name_flat: row.get("image_name_flat"),
        image_name_heels: row.get("image_name_heels"),
        tags,
        supported_foot_styles,
    }
}

/// Insert a new clothing item
pub async fn insert_item(pool: &SqlitePool, item: &ClothingItem) -> Result<()> {
    let styles_json = item
        .supported_foot_styles
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| crate::Error::Internal(e.to_string()))?;

    sqlx::query(
        r#"
        INSERT INTO clothing_items
            (guid, name, category, subcategory, image_name, image_name_flat,
             image_name_heels, tags, supported_foot_styles)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(item.id.to_string())
    .bind(&item.name)
    .bind(item.category.to_db_string())
    .bind(item.subcategory.map(|s| s.to_db_string()))
    .bind(&item.image_name)
    .bind(&item.image_name_flat)
    .bind(&item.image_name_heels)
    .bind(serde_json::to_string(&item.tags).map_err(|e| crate::Error::Internal(e.to_string()))?)
    .bind(styles_json)
    .execute(pool)
    .await?;

    Ok(())
}

/// Update every mutable field of an existing item (identity excepted)
pub async fn update_item(pool: &SqlitePool, item: &ClothingItem) -> Result<bool> {
    let styles_json = item
        .supported_foot_styles
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| crate::Error::Internal(e.to_string()))?;

    let result = sqlx::query(
        r#"
        UPDATE clothing_items
        SET name = ?, category = ?, subcategory = ?, image_name = ?,
            image_name_flat = ?, image_name_heels = ?, tags = ?,
            supported_foot_styles = ?, updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&item.name)
    .bind(item.category.to_db_string())
    .bind(item.subcategory.map(|s| s.to_db_string()))
    .bind(&item.image_name)
    .bind(&item.image_name_flat)
    .bind(&item.image_name_heels)
    .bind(serde_json::to_string(&item.tags).map_err(|e| crate::Error::Internal(e.to_string()))?)
    .bind(styles_json)
    .bind(item.id.to_string())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a clothing item
///
/// Does NOT scrub the id out of outfit layering sequences; read paths
/// tolerate the dangling reference as "missing item".
pub async fn delete_item(pool: &SqlitePool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM clothing_items WHERE guid = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Get a single item by id; missing rows resolve to None
pub async fn get_item(pool: &SqlitePool, id: Uuid) -> Result<Option<ClothingItem>> {
    let row = sqlx::query("SELECT * FROM clothing_items WHERE guid = ?")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(item_from_row))
}

/// List the full catalog in insertion order
pub async fn list_items(pool: &SqlitePool) -> Result<Vec<ClothingItem>> {
    let rows = sqlx::query("SELECT * FROM clothing_items ORDER BY created_at, guid")
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(item_from_row).collect())
}

/// Number of cataloged items
pub async fn count_items(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clothing_items")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
