//! Default wardrobe seeding
//!
//! On first launch the catalog is empty; the composition root calls
//! [`seed_default_items_if_empty`] once to populate it with the starter
//! wardrobe. Seeding never runs when any item already exists.

use crate::catalog::{ClothingCategory, ClothingSubcategory, FootStyle};
use crate::db;
use crate::db::models::ClothingItem;
use crate::Result;
use sqlx::SqlitePool;
use tracing::info;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn top(name: &str, image: &str, tag_values: &[&str]) -> ClothingItem {
    let mut item = ClothingItem::new(name, ClothingCategory::Tops);
    item.image_name = Some(image.to_string());
    item.tags = tags(tag_values);
    item
}

fn bottom(
    name: &str,
    subcategory: ClothingSubcategory,
    image: &str,
    tag_values: &[&str],
) -> ClothingItem {
    let mut item = ClothingItem::new(name, ClothingCategory::Bottoms);
    item.subcategory = Some(subcategory);
    item.image_name = Some(image.to_string());
    item.tags = tags(tag_values);
    item
}

/// Tights ship flat/heels asset pairs and support both foot styles
fn tights(name: &str, flat: &str, heels: &str, tag_values: &[&str]) -> ClothingItem {
    let mut item = ClothingItem::new(name, ClothingCategory::Undergarments);
    item.subcategory = Some(ClothingSubcategory::Tights);
    item.image_name_flat = Some(flat.to_string());
    item.image_name_heels = Some(heels.to_string());
    item.tags = tag_values.iter().map(|s| s.to_string()).collect();
    item.supported_foot_styles = Some(vec![FootStyle::Flat, FootStyle::Heels]);
    item
}

fn shoes(name: &str, image: &str, tag_values: &[&str], styles: &[FootStyle]) -> ClothingItem {
    let mut item = ClothingItem::new(name, ClothingCategory::Shoes);
    item.image_name = Some(image.to_string());
    item.tags = tags(tag_values);
    item.supported_foot_styles = Some(styles.to_vec());
    item
}

/// The starter wardrobe
pub fn default_items() -> Vec<ClothingItem> {
    vec![
        // Tops
        top(
            "Green Sweater",
            "green_sweater",
            &["turtle neck", "fall", "winter", "green", "polyester"],
        ),
        top(
            "Black Crop Top",
            "black_crop",
            &["mock turtle neck", "black", "crop top"],
        ),
        top(
            "Gray Crop Tank",
            "gray_tank",
            &["velvet", "tank top", "crop top", "gray"],
        ),
        top(
            "Green Crop Tank",
            "green_tank",
            &["velvet", "tank top", "crop top", "green"],
        ),
        // Bottoms
        bottom(
            "Jeans",
            ClothingSubcategory::Pants,
            "jeans",
            &["denim", "light blue", "pacsun", "high waisted"],
        ),
        bottom(
            "Black Skort",
            ClothingSubcategory::ShortSkirts,
            "black_skort",
            &["black", "skort", "gold", "mini skirt"],
        ),
        bottom(
            "Cheetah Skirt",
            ClothingSubcategory::LongSkirts,
            "pink_cheetah",
            &["pink", "long skirt", "cheetah print", "shimmery"],
        ),
        bottom(
            "Leopard Skirt",
            ClothingSubcategory::LongSkirts,
            "leopard",
            &["tan", "black", "long skirt", "leopard print", "slit"],
        ),
        // Undergarments - tights
        tights(
            "Black Sheer Tights",
            "black_sheer_flat",
            "black_sheer_heels",
            &["tights", "winter", "fall", "black"],
        ),
        tights(
            "Polkadot Tights",
            "polkadot_flat",
            "polkadot_heels",
            &["tights", "winter", "fall", "black"],
        ),
        tights(
            "Maroon Tights",
            "maroon_flat",
            "maroon_heels",
            &["tights", "winter", "fall", "maroon"],
        ),
        tights(
            "Navy Plaid Tights",
            "navy_plaid_flat",
            "navy_plaid_heels",
            &["tights", "winter", "fall", "navy", "plaid"],
        ),
        tights(
            "Fleece Tights",
            "fleece_flat",
            "fleece_heels",
            &["tights", "winter", "fall", "peach", "tan", "fleece"],
        ),
        // Shoes
        shoes(
            "White Sneakers",
            "white_tennis_shoes",
            &["casual"],
            &[FootStyle::Flat],
        ),
        shoes(
            "Tall Black Boots",
            "black_boots",
            &["black", "leather", "winter", "fall", "knee high", "boots"],
            &[FootStyle::Heels],
        ),
        shoes(
            "Gray Uggs",
            "gray_uggs",
            &["gray", "boots", "winter", "fall"],
            &[FootStyle::Flat],
        ),
    ]
}

/// Seed the starter wardrobe when the catalog is empty
///
/// Returns true when seeding happened.
pub async fn seed_default_items_if_empty(pool: &SqlitePool) -> Result<bool> {
    if db::items::count_items(pool).await? > 0 {
        return Ok(false);
    }

    let items = default_items();
    for item in &items {
        db::items::insert_item(pool, item).await?;
    }

    info!("Seeded {} default clothing items", items.len());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wardrobe_size() {
        assert_eq!(default_items().len(), 16);
    }

    #[test]
    fn test_tights_carry_both_style_assets() {
        for item in default_items() {
            if item.subcategory == Some(ClothingSubcategory::Tights) {
                assert!(item.image_name_flat.is_some(), "{} lacks flat asset", item.name);
                assert!(item.image_name_heels.is_some(), "{} lacks heels asset", item.name);
                assert_eq!(
                    item.supported_foot_styles,
                    Some(vec![FootStyle::Flat, FootStyle::Heels])
                );
            }
        }
    }

    #[test]
    fn test_shoes_are_single_style() {
        let items = default_items();
        let boots = items.iter().find(|i| i.name == "Tall Black Boots").unwrap();
        assert_eq!(boots.supported_foot_styles, Some(vec![FootStyle::Heels]));
        assert!(!boots.is_compatible(FootStyle::Flat));

        let sneakers = items.iter().find(|i| i.name == "White Sneakers").unwrap();
        assert!(sneakers.is_compatible(FootStyle::Flat));
        assert!(!sneakers.is_compatible(FootStyle::Heels));
    }

    #[test]
    fn test_tops_are_unrestricted() {
        for item in default_items() {
            if item.category == ClothingCategory::Tops {
                assert!(item.supported_foot_styles.is_none());
                assert!(item.is_compatible(FootStyle::Heels));
            }
        }
    }
}
