//! Dressing room session handlers
//!
//! The dressing room holds at most one working outfit at a time, behind
//! the state's RwLock. Each mutating handler runs the engine operation
//! and then persists: the first time a draft gains an item it is
//! inserted; every edit after that updates the stored row in place.

use axum::{extract::State, http::StatusCode, Json};
use closet_common::catalog::FootStyle;
use closet_common::db::models::Outfit;
use closet_common::db::{items, outfits};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::parse_date_param;
use crate::avatar::{avatar_layers, AvatarLayer};
use crate::dressing_room::{parse_tags, WorkingOutfit, AVAILABLE_HAIRSTYLES};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Dressing room state as the client renders it
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub outfit: Outfit,
    pub persisted: bool,
    pub layers: Vec<AvatarLayer>,
    pub hairstyles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    /// Open an existing outfit for editing; absent starts a fresh draft
    #[serde(default)]
    pub outfit_id: Option<Uuid>,
    /// Pre-date a fresh draft (YYYY-MM-DD)
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub item_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub indices: Vec<usize>,
}

#[derive(Debug, Deserialize)]
pub struct FootStyleRequest {
    pub foot_style: FootStyle,
}

#[derive(Debug, Deserialize)]
pub struct HairRequest {
    pub asset: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub title: String,
    /// Comma-separated tag text as typed in the save sheet
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub trip_id: Option<Uuid>,
}

async fn session_view(state: &AppState, draft: &WorkingOutfit) -> ApiResult<SessionView> {
    let catalog = items::list_items(&state.db).await?;
    Ok(SessionView {
        outfit: draft.outfit().clone(),
        persisted: draft.is_persisted(),
        layers: avatar_layers(draft.outfit(), &catalog),
        hairstyles: AVAILABLE_HAIRSTYLES.iter().map(|s| s.to_string()).collect(),
    })
}

/// Persist the draft after a mutation
///
/// Empty never-saved drafts stay in memory only; the first non-empty
/// state triggers the one insert, and everything after is an update.
async fn persist(state: &AppState, draft: &mut WorkingOutfit) -> ApiResult<()> {
    if draft.needs_insert() {
        outfits::insert_outfit(&state.db, draft.outfit()).await?;
        draft.mark_persisted();
        tracing::info!(outfit_id = %draft.outfit().id, "Committed new outfit");
    } else if draft.is_persisted() {
        outfits::update_outfit(&state.db, draft.outfit()).await?;
    }
    Ok(())
}

/// POST /api/dressing-room
pub async fn start_session(
    State(state): State<AppState>,
    Json(request): Json<StartSessionRequest>,
) -> ApiResult<Json<SessionView>> {
    let draft = match request.outfit_id {
        Some(id) => {
            let outfit = outfits::get_outfit(&state.db, id)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("Outfit {}", id)))?;
            WorkingOutfit::from_saved(outfit)
        }
        None => {
            let date = request
                .date
                .as_deref()
                .map(parse_date_param)
                .transpose()?;
            WorkingOutfit::new_draft(date, request.title.as_deref())
        }
    };

    let view = session_view(&state, &draft).await?;
    *state.dressing_room.write().await = Some(draft);
    tracing::info!(outfit_id = %view.outfit.id, "Opened dressing room session");

    Ok(Json(view))
}

/// GET /api/dressing-room
pub async fn get_session(State(state): State<AppState>) -> ApiResult<Json<SessionView>> {
    let guard = state.dressing_room.read().await;
    let draft = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("No dressing room session".to_string()))?;
    let view = session_view(&state, draft).await?;
    Ok(Json(view))
}

/// DELETE /api/dressing-room
///
/// Discards the in-memory draft. Already-persisted edits stay saved.
pub async fn end_session(State(state): State<AppState>) -> ApiResult<StatusCode> {
    *state.dressing_room.write().await = None;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/dressing-room/toggle
pub async fn toggle_item(
    State(state): State<AppState>,
    Json(request): Json<ToggleRequest>,
) -> ApiResult<Json<SessionView>> {
    let mut guard = state.dressing_room.write().await;
    let draft = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("No dressing room session".to_string()))?;

    draft.toggle_item(request.item_id);
    persist(&state, draft).await?;

    let view = session_view(&state, draft).await?;
    Ok(Json(view))
}

/// POST /api/dressing-room/move
pub async fn move_item(
    State(state): State<AppState>,
    Json(request): Json<MoveRequest>,
) -> ApiResult<Json<SessionView>> {
    let mut guard = state.dressing_room.write().await;
    let draft = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("No dressing room session".to_string()))?;

    draft.move_item(request.from, request.to);
    persist(&state, draft).await?;

    let view = session_view(&state, draft).await?;
    Ok(Json(view))
}

/// POST /api/dressing-room/remove
pub async fn remove_items(
    State(state): State<AppState>,
    Json(request): Json<RemoveRequest>,
) -> ApiResult<Json<SessionView>> {
    let mut guard = state.dressing_room.write().await;
    let draft = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("No dressing room session".to_string()))?;

    draft.remove_items(&request.indices);
    persist(&state, draft).await?;

    let view = session_view(&state, draft).await?;
    Ok(Json(view))
}

/// POST /api/dressing-room/foot-style
pub async fn set_foot_style(
    State(state): State<AppState>,
    Json(request): Json<FootStyleRequest>,
) -> ApiResult<Json<SessionView>> {
    let mut guard = state.dressing_room.write().await;
    let draft = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("No dressing room session".to_string()))?;

    let catalog = items::list_items(&state.db).await?;
    draft.set_foot_style(request.foot_style, &catalog);
    persist(&state, draft).await?;

    let view = session_view(&state, draft).await?;
    Ok(Json(view))
}

/// POST /api/dressing-room/hair
pub async fn set_hair(
    State(state): State<AppState>,
    Json(request): Json<HairRequest>,
) -> ApiResult<Json<SessionView>> {
    if !AVAILABLE_HAIRSTYLES.contains(&request.asset.as_str()) {
        return Err(ApiError::BadRequest(format!(
            "Unknown hairstyle '{}'",
            request.asset
        )));
    }

    let mut guard = state.dressing_room.write().await;
    let draft = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("No dressing room session".to_string()))?;

    draft.set_hair(request.asset);
    persist(&state, draft).await?;

    let view = session_view(&state, draft).await?;
    Ok(Json(view))
}

/// POST /api/dressing-room/save
pub async fn save_session(
    State(state): State<AppState>,
    Json(request): Json<SaveRequest>,
) -> ApiResult<Json<SessionView>> {
    let date = request.date.as_deref().map(parse_date_param).transpose()?;

    if let Some(trip_id) = request.trip_id {
        if closet_common::db::trips::get_trip(&state.db, trip_id)
            .await?
            .is_none()
        {
            return Err(ApiError::BadRequest(format!("Unknown trip {}", trip_id)));
        }
    }

    let mut guard = state.dressing_room.write().await;
    let draft = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("No dressing room session".to_string()))?;

    draft.apply_save(&request.title, parse_tags(&request.tags), date, request.trip_id);
    persist(&state, draft).await?;

    let view = session_view(&state, draft).await?;
    tracing::info!(outfit_id = %view.outfit.id, title = %view.outfit.title, "Saved outfit");
    Ok(Json(view))
}

/// GET /api/dressing-room/hairstyles
pub async fn list_hairstyles() -> Json<Vec<String>> {
    Json(AVAILABLE_HAIRSTYLES.iter().map(|s| s.to_string()).collect())
}
