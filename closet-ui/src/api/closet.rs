//! Grouped closet view handler
//!
//! Flattens the catalog into the display structure the closet screen
//! paints: categories in fixed display order, subcategory sections, and
//! per-item thumbnail assets with their layout parameters. With a
//! `foot_style` query the view resolves style-specific assets and marks
//! incompatible items; without one it uses the neutral display asset.

use axum::{
    extract::{Query, State},
    Json,
};
use closet_common::catalog::{ClothingCategory, ClothingSubcategory, FootStyle};
use closet_common::db::items;
use closet_common::grouping::group_by_category;
use closet_common::layout::{thumbnail_layout, ThumbnailLayout};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ClosetQuery {
    /// Resolve thumbnails for this foot style; absent = neutral view
    pub foot_style: Option<FootStyle>,
}

#[derive(Debug, Serialize)]
pub struct ClosetThumbnail {
    pub item_id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub layout: ThumbnailLayout,
    /// False when a foot style was requested and the item rejects it
    pub compatible: bool,
}

#[derive(Debug, Serialize)]
pub struct ClosetSection {
    pub subcategory: Option<ClothingSubcategory>,
    pub label: String,
    pub thumbnails: Vec<ClosetThumbnail>,
}

#[derive(Debug, Serialize)]
pub struct ClosetGroup {
    pub category: ClothingCategory,
    pub label: String,
    pub sections: Vec<ClosetSection>,
}

/// GET /api/closet?foot_style=
pub async fn get_closet(
    State(state): State<AppState>,
    Query(query): Query<ClosetQuery>,
) -> ApiResult<Json<Vec<ClosetGroup>>> {
    let all = items::list_items(&state.db).await?;

    let groups = group_by_category(&all)
        .into_iter()
        .map(|group| ClosetGroup {
            category: group.category,
            label: group.label,
            sections: group
                .sections
                .into_iter()
                .map(|section| ClosetSection {
                    subcategory: section.subcategory,
                    label: section.label,
                    thumbnails: section
                        .items
                        .iter()
                        .map(|item| {
                            let (image, compatible) = match query.foot_style {
                                Some(style) => (
                                    item.image_for(style).map(str::to_string),
                                    item.is_compatible(style),
                                ),
                                None => (item.display_image().map(str::to_string), true),
                            };
                            ClosetThumbnail {
                                item_id: item.id,
                                name: item.name.clone(),
                                image,
                                layout: thumbnail_layout(item.category, item.subcategory),
                                compatible,
                            }
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    Ok(Json(groups))
}
