//! Saved outfit handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use closet_common::db::models::Outfit;
use closet_common::db::{items, outfits};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::avatar::{avatar_layers, AvatarLayer};
use crate::error::{ApiError, ApiResult};
use crate::travel::search_outfits;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct OutfitListQuery {
    /// Case-insensitive substring match over title and tags
    pub search: Option<String>,
}

/// One outfit with its resolved avatar stack
#[derive(Debug, Serialize)]
pub struct OutfitDetail {
    #[serde(flatten)]
    pub outfit: Outfit,
    pub layers: Vec<AvatarLayer>,
}

/// GET /api/outfits?search=
pub async fn list_outfits(
    State(state): State<AppState>,
    Query(query): Query<OutfitListQuery>,
) -> ApiResult<Json<Vec<Outfit>>> {
    let all = outfits::list_outfits(&state.db).await?;
    let filtered: Vec<Outfit> = search_outfits(&all, query.search.as_deref().unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(filtered))
}

/// GET /api/outfits/:id
pub async fn get_outfit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<OutfitDetail>> {
    let outfit = outfits::get_outfit(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Outfit {}", id)))?;

    let catalog = items::list_items(&state.db).await?;
    let layers = avatar_layers(&outfit, &catalog);

    Ok(Json(OutfitDetail { outfit, layers }))
}

/// DELETE /api/outfits/:id
pub async fn delete_outfit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if !outfits::delete_outfit(&state.db, id).await? {
        return Err(ApiError::NotFound(format!("Outfit {}", id)));
    }
    tracing::info!(outfit_id = %id, "Deleted outfit");
    Ok(StatusCode::NO_CONTENT)
}
