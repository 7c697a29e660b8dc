//! Database initialization
//!
//! Creates the SQLite database and schema on first run; opening an
//! existing database is a no-op for every CREATE TABLE (all idempotent).

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use sqlite options to create database if it doesn't exist
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL mode allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    // Set busy timeout
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_clothing_items_table(&pool).await?;
    create_outfits_table(&pool).await?;
    create_outfit_items_table(&pool).await?;
    create_trips_table(&pool).await?;

    Ok(pool)
}

async fn create_clothing_items_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clothing_items (
            guid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            subcategory TEXT,
            image_name TEXT,
            image_name_flat TEXT,
            image_name_heels TEXT,
            tags TEXT NOT NULL DEFAULT '[]',
            supported_foot_styles TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_outfits_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS outfits (
            guid TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            date TIMESTAMP,
            tags TEXT NOT NULL DEFAULT '[]',
            trip_guid TEXT,
            foot_style TEXT NOT NULL DEFAULT 'flat',
            hair_asset TEXT NOT NULL DEFAULT 'hair_default',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Ordered link table carrying the outfit layering sequence.
/// No foreign key to clothing_items: dangling item references are
/// tolerated and resolved as "missing item" at read time.
async fn create_outfit_items_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS outfit_items (
            outfit_guid TEXT NOT NULL,
            position INTEGER NOT NULL,
            item_guid TEXT NOT NULL,
            PRIMARY KEY (outfit_guid, position),
            FOREIGN KEY (outfit_guid) REFERENCES outfits(guid) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_trips_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS trips (
            guid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            start_date TIMESTAMP NOT NULL,
            end_date TIMESTAMP NOT NULL,
            location_name TEXT NOT NULL,
            latitude REAL,
            longitude REAL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
