//! Clothing item CRUD handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use closet_common::catalog::{ClothingCategory, ClothingSubcategory, FootStyle};
use closet_common::db::items;
use closet_common::db::models::ClothingItem;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// POST /api/items request body
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub category: ClothingCategory,
    #[serde(default)]
    pub subcategory: Option<ClothingSubcategory>,
    #[serde(default)]
    pub image_name: Option<String>,
    #[serde(default)]
    pub image_name_flat: Option<String>,
    #[serde(default)]
    pub image_name_heels: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub supported_foot_styles: Option<Vec<FootStyle>>,
}

/// PATCH /api/items/:id request body; absent fields keep their value
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub category: Option<ClothingCategory>,
    /// Double-option: absent = keep, null = clear
    #[serde(default, with = "crate::api::double_option")]
    pub subcategory: Option<Option<ClothingSubcategory>>,
    #[serde(default, with = "crate::api::double_option")]
    pub image_name: Option<Option<String>>,
    #[serde(default, with = "crate::api::double_option")]
    pub image_name_flat: Option<Option<String>>,
    #[serde(default, with = "crate::api::double_option")]
    pub image_name_heels: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    #[serde(default, with = "crate::api::double_option")]
    pub supported_foot_styles: Option<Option<Vec<FootStyle>>>,
}

/// GET /api/items
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<ClothingItem>>> {
    let all = items::list_items(&state.db).await?;
    Ok(Json(all))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> ApiResult<(StatusCode, Json<ClothingItem>)> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Item name cannot be empty".to_string()));
    }

    let mut item = ClothingItem::new(request.name.trim(), request.category);
    item.subcategory = request.subcategory;
    item.image_name = request.image_name;
    item.image_name_flat = request.image_name_flat;
    item.image_name_heels = request.image_name_heels;
    item.tags = request.tags;
    item.supported_foot_styles = request.supported_foot_styles;

    items::insert_item(&state.db, &item).await?;
    tracing::info!(item_id = %item.id, name = %item.name, "Created clothing item");

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/items/:id
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ClothingItem>> {
    let item = items::get_item(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Item {}", id)))?;
    Ok(Json(item))
}

/// PATCH /api/items/:id
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateItemRequest>,
) -> ApiResult<Json<ClothingItem>> {
    let mut item = items::get_item(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Item {}", id)))?;

    if let Some(name) = request.name {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest("Item name cannot be empty".to_string()));
        }
        item.name = name.trim().to_string();
    }
    if let Some(category) = request.category {
        item.category = category;
    }
    if let Some(subcategory) = request.subcategory {
        item.subcategory = subcategory;
    }
    if let Some(image_name) = request.image_name {
        item.image_name = image_name;
    }
    if let Some(image_name_flat) = request.image_name_flat {
        item.image_name_flat = image_name_flat;
    }
    if let Some(image_name_heels) = request.image_name_heels {
        item.image_name_heels = image_name_heels;
    }
    if let Some(tags) = request.tags {
        item.tags = tags;
    }
    if let Some(styles) = request.supported_foot_styles {
        item.supported_foot_styles = styles;
    }

    if !items::update_item(&state.db, &item).await? {
        return Err(ApiError::NotFound(format!("Item {}", id)));
    }
    tracing::info!(item_id = %id, "Updated clothing item");

    Ok(Json(item))
}

/// DELETE /api/items/:id
///
/// Outfits keep any reference to the deleted item; read paths render it
/// as missing.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if !items::delete_item(&state.db, id).await? {
        return Err(ApiError::NotFound(format!("Item {}", id)));
    }
    tracing::info!(item_id = %id, "Deleted clothing item");
    Ok(StatusCode::NO_CONTENT)
}
