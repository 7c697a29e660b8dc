//! Avatar render stack
//!
//! Resolves an outfit into the ordered list of image assets the client
//! paints bottom-up: base body, feet, clothing layers, hair on top.

use closet_common::db::models::{ClothingItem, Outfit};
use uuid::Uuid;

pub const AVATAR_BASE_ASSET: &str = "avatar_base";

/// One paintable layer of the avatar stack
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AvatarLayer {
    pub asset: String,
    /// Catalog item behind this layer, if any; base, feet, and hair
    /// layers have none
    pub item_id: Option<Uuid>,
}

impl AvatarLayer {
    fn fixture(asset: &str) -> Self {
        Self {
            asset: asset.to_string(),
            item_id: None,
        }
    }
}

/// Build the avatar paint order for an outfit
///
/// Bottom-up: base body, feet for the outfit's foot style, each layered
/// item's style-resolved asset in sequence order, hair last. Items that
/// are incompatible with the foot style, unresolvable, or have no asset
/// contribute no layer.
pub fn avatar_layers(outfit: &Outfit, catalog: &[ClothingItem]) -> Vec<AvatarLayer> {
    let mut layers = Vec::with_capacity(outfit.item_ids.len() + 3);
    layers.push(AvatarLayer::fixture(AVATAR_BASE_ASSET));
    layers.push(AvatarLayer::fixture(outfit.foot_style.asset_name()));

    for id in &outfit.item_ids {
        let Some(item) = catalog.iter().find(|item| item.id == *id) else {
            continue;
        };
        if !item.is_compatible(outfit.foot_style) {
            continue;
        }
        if let Some(asset) = item.image_for(outfit.foot_style) {
            layers.push(AvatarLayer {
                asset: asset.to_string(),
                item_id: Some(item.id),
            });
        }
    }

    layers.push(AvatarLayer::fixture(&outfit.hair_asset));
    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use closet_common::catalog::{ClothingCategory, FootStyle};

    fn item(name: &str, asset: &str) -> ClothingItem {
        let mut item = ClothingItem::new(name, ClothingCategory::Tops);
        item.image_name = Some(asset.to_string());
        item
    }

    #[test]
    fn test_base_feet_items_hair_order() {
        let shirt = item("Shirt", "shirt");
        let skirt = item("Skirt", "skirt");
        let mut outfit = Outfit::new("Test");
        outfit.item_ids = vec![shirt.id, skirt.id];
        outfit.foot_style = FootStyle::Heels;
        outfit.hair_asset = "hair_wavy".to_string();

        let layers = avatar_layers(&outfit, &[shirt.clone(), skirt.clone()]);
        let assets: Vec<&str> = layers.iter().map(|l| l.asset.as_str()).collect();
        assert_eq!(
            assets,
            vec!["avatar_base", "avatar_feet_heels", "shirt", "skirt", "hair_wavy"]
        );
        assert_eq!(layers[2].item_id, Some(shirt.id));
        assert_eq!(layers[4].item_id, None);
    }

    #[test]
    fn test_incompatible_and_dangling_items_skipped() {
        let mut heels_only = item("Pumps", "pumps");
        heels_only.supported_foot_styles = Some(vec![FootStyle::Heels]);

        let mut outfit = Outfit::new("Test");
        outfit.item_ids = vec![heels_only.id, Uuid::new_v4()];
        outfit.foot_style = FootStyle::Flat;

        let layers = avatar_layers(&outfit, &[heels_only]);
        let assets: Vec<&str> = layers.iter().map(|l| l.asset.as_str()).collect();
        assert_eq!(assets, vec!["avatar_base", "avatar_feet_flat", "hair_default"]);
    }

    #[test]
    fn test_style_specific_asset_resolved() {
        let mut tights = item("Tights", "tights");
        tights.image_name_flat = Some("tights_flat".to_string());
        tights.image_name_heels = Some("tights_heels".to_string());
        tights.supported_foot_styles = Some(vec![FootStyle::Flat, FootStyle::Heels]);

        let mut outfit = Outfit::new("Test");
        outfit.item_ids = vec![tights.id];
        outfit.foot_style = FootStyle::Heels;

        let layers = avatar_layers(&outfit, &[tights]);
        assert_eq!(layers[2].asset, "tights_heels");
    }

    #[test]
    fn test_item_without_asset_contributes_no_layer() {
        let bare = ClothingItem::new("No Art", ClothingCategory::Other);
        let mut outfit = Outfit::new("Test");
        outfit.item_ids = vec![bare.id];

        let layers = avatar_layers(&outfit, &[bare]);
        assert_eq!(layers.len(), 3);
    }
}
