//! closet-ui library - local wardrobe UI service
//!
//! Serves the single-user closet over HTTP: catalog CRUD, the grouped
//! closet view, the dressing room session, saved outfits, trips with
//! packing lists, outfit-of-the-day, and location search.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tokio::sync::RwLock;

pub mod api;
pub mod avatar;
pub mod dressing_room;
pub mod error;
pub mod services;
pub mod travel;

use dressing_room::WorkingOutfit;
use services::generation::GenerationCounter;
use services::geocoding::GeocodingClient;
use services::weather::WeatherClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// The one working outfit being edited, if any
    pub dressing_room: Arc<RwLock<Option<WorkingOutfit>>>,
    pub geocoding: Arc<GeocodingClient>,
    pub weather: Arc<WeatherClient>,
    /// Latest-request-wins counters for overlapping lookups
    pub geocode_gen: Arc<GenerationCounter>,
    pub weather_gen: Arc<GenerationCounter>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        db: SqlitePool,
        geocoding: GeocodingClient,
        weather: WeatherClient,
    ) -> Self {
        Self {
            db,
            dressing_room: Arc::new(RwLock::new(None)),
            geocoding: Arc::new(geocoding),
            weather: Arc::new(weather),
            geocode_gen: Arc::new(GenerationCounter::new()),
            weather_gen: Arc::new(GenerationCounter::new()),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;

    let api = Router::new()
        .route("/api/items", get(api::items::list_items).post(api::items::create_item))
        .route(
            "/api/items/:id",
            get(api::items::get_item)
                .patch(api::items::update_item)
                .delete(api::items::delete_item),
        )
        .route("/api/closet", get(api::closet::get_closet))
        .route(
            "/api/dressing-room",
            get(api::dressing_room::get_session)
                .post(api::dressing_room::start_session)
                .delete(api::dressing_room::end_session),
        )
        .route("/api/dressing-room/toggle", post(api::dressing_room::toggle_item))
        .route("/api/dressing-room/move", post(api::dressing_room::move_item))
        .route("/api/dressing-room/remove", post(api::dressing_room::remove_items))
        .route("/api/dressing-room/foot-style", post(api::dressing_room::set_foot_style))
        .route("/api/dressing-room/hair", post(api::dressing_room::set_hair))
        .route("/api/dressing-room/save", post(api::dressing_room::save_session))
        .route("/api/dressing-room/hairstyles", get(api::dressing_room::list_hairstyles))
        .route("/api/outfits", get(api::outfits::list_outfits))
        .route(
            "/api/outfits/:id",
            get(api::outfits::get_outfit).delete(api::outfits::delete_outfit),
        )
        .route("/api/ootd", get(api::ootd::get_ootd))
        .route("/api/trips", get(api::trips::list_trips).post(api::trips::create_trip))
        .route(
            "/api/trips/:id",
            get(api::trips::get_trip)
                .patch(api::trips::update_trip)
                .delete(api::trips::delete_trip),
        )
        .route("/api/geocode", get(api::geocode::search_places))
        .route("/api/geocode/resolve", post(api::geocode::resolve_place));

    Router::new()
        .merge(api)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
