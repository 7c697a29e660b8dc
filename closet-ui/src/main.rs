//! closet-ui - Local wardrobe UI service entry point
//!
//! Single-user HTTP service over the local closet database: catalog,
//! dressing room, outfits, trips, and outfit-of-the-day.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use closet_common::config::{database_path, ensure_root_folder, resolve_root_folder};
use closet_common::db::init_database;
use closet_common::seed::seed_default_items_if_empty;
use closet_ui::services::geocoding::GeocodingClient;
use closet_ui::services::weather::WeatherClient;
use closet_ui::{build_router, AppState};

/// Command-line arguments for closet-ui
#[derive(Parser, Debug)]
#[command(name = "closet-ui")]
#[command(about = "Local wardrobe catalog and outfit planner")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5740", env = "MYCLOSET_PORT")]
    port: u16,

    /// Root folder holding the closet database
    #[arg(short, long, env = "MYCLOSET_ROOT")]
    root_folder: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "closet_ui=debug,closet_common=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting MyCloset UI v{}", env!("CARGO_PKG_VERSION"));

    let root_folder = resolve_root_folder(args.root_folder.as_deref());
    ensure_root_folder(&root_folder).context("Failed to create root folder")?;
    info!("Root folder: {}", root_folder.display());

    let db_path = database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path)
        .await
        .context("Failed to initialize database")?;

    if seed_default_items_if_empty(&pool)
        .await
        .context("Failed to seed default items")?
    {
        info!("Seeded default clothing items into empty catalog");
    }

    let geocoding = GeocodingClient::new().context("Failed to create geocoding client")?;
    let weather = WeatherClient::new().context("Failed to create weather client")?;

    let state = AppState::new(pool, geocoding, weather);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port))
        .await
        .context("Failed to bind listen address")?;
    info!("closet-ui listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
