//! Category/subcategory grouping for closet views
//!
//! Buckets a collection of clothing items first by category (fixed display
//! order, empty categories omitted), then by subcategory (sections sorted
//! by display label, items with no subcategory under "Other").

use crate::catalog::{ClothingCategory, ClothingSubcategory};
use crate::db::models::ClothingItem;
use serde::Serialize;

/// Label used for the implicit no-subcategory bucket
pub const NO_SUBCATEGORY_LABEL: &str = "Other";

/// Items sharing one subcategory within a category group
#[derive(Debug, Clone, Serialize)]
pub struct SubcategorySection {
    pub subcategory: Option<ClothingSubcategory>,
    pub label: String,
    pub items: Vec<ClothingItem>,
}

/// Items of one category, in subcategory sections
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: ClothingCategory,
    pub label: String,
    pub sections: Vec<SubcategorySection>,
}

/// Display label for an optional subcategory
pub fn subcategory_label(subcategory: Option<ClothingSubcategory>) -> String {
    subcategory
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| NO_SUBCATEGORY_LABEL.to_string())
}

/// Group items by category, then subcategory, for display
///
/// Category order follows [`ClothingCategory::DISPLAY_ORDER`]; categories
/// with no items are omitted entirely. Within a category, sections are
/// sorted lexicographically by display label, the "Other" bucket sorting
/// by its literal label. Item order within a section is the input order.
pub fn group_by_category(items: &[ClothingItem]) -> Vec<CategoryGroup> {
    let mut groups = Vec::new();

    for category in ClothingCategory::DISPLAY_ORDER {
        let category_items: Vec<&ClothingItem> =
            items.iter().filter(|i| i.category == category).collect();
        if category_items.is_empty() {
            continue;
        }

        let mut sections: Vec<SubcategorySection> = Vec::new();
        for item in category_items {
            match sections
                .iter_mut()
                .find(|s| s.subcategory == item.subcategory)
            {
                Some(section) => section.items.push(item.clone()),
                None => sections.push(SubcategorySection {
                    subcategory: item.subcategory,
                    label: subcategory_label(item.subcategory),
                    items: vec![item.clone()],
                }),
            }
        }
        sections.sort_by(|a, b| a.label.cmp(&b.label));

        groups.push(CategoryGroup {
            category,
            label: category.display_name().to_string(),
            sections,
        });
    }

    groups
}
