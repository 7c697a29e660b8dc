//! Thumbnail layout table
//!
//! How zoomed and positioned an item image is inside the fixed 80x80
//! thumbnail card. Pure data keyed by (category, subcategory): exact pair
//! entries first, then a category-wide entry, then the neutral default.

use crate::catalog::{ClothingCategory, ClothingSubcategory};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Scale and vertical offset applied inside the thumbnail frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThumbnailLayout {
    pub content_width: f32,
    pub content_height: f32,
    pub y_offset: f32,
}

/// Neutral, un-zoomed layout used when no table entry applies
pub const DEFAULT_LAYOUT: ThumbnailLayout = ThumbnailLayout {
    content_width: 80.0,
    content_height: 80.0,
    y_offset: 0.0,
};

const fn layout(content_width: f32, content_height: f32, y_offset: f32) -> ThumbnailLayout {
    ThumbnailLayout {
        content_width,
        content_height,
        y_offset,
    }
}

type LayoutKey = (ClothingCategory, Option<ClothingSubcategory>);

/// Layout entries. A None subcategory key is the category-wide entry.
static LAYOUT_TABLE: Lazy<HashMap<LayoutKey, ThumbnailLayout>> = Lazy::new(|| {
    use ClothingCategory::*;
    use ClothingSubcategory::*;

    HashMap::from([
        ((Tops, None), layout(130.0, 230.0, 35.0)),
        ((Jackets, None), layout(100.0, 200.0, 30.0)),
        ((Bottoms, Some(Pants)), layout(70.0, 170.0, -15.0)),
        ((Bottoms, Some(Shorts)), layout(140.0, 240.0, 10.0)),
        ((Bottoms, Some(LongSkirts)), layout(70.0, 170.0, -15.0)),
        ((Bottoms, Some(ShortSkirts)), layout(140.0, 240.0, 10.0)),
        ((Undergarments, Some(Tights)), layout(60.0, 160.0, -20.0)),
        ((Undergarments, Some(Socks)), layout(140.0, 240.0, -80.0)),
        ((Shoes, None), layout(200.0, 200.0, -55.0)),
        // Most accessories sit around the head/upper body
        ((Accessories, None), layout(140.0, 200.0, 30.0)),
        ((Other, None), layout(150.0, 260.0, 60.0)),
    ])
});

/// Look up the thumbnail layout for a (category, subcategory) pair
///
/// Bottoms and undergarments are subcategory-aware; a subcategory with no
/// entry (or none at all) in those categories gets [`DEFAULT_LAYOUT`].
/// Every other category uses its category-wide entry regardless of
/// subcategory.
pub fn thumbnail_layout(
    category: ClothingCategory,
    subcategory: Option<ClothingSubcategory>,
) -> ThumbnailLayout {
    if let Some(layout) = LAYOUT_TABLE.get(&(category, subcategory)) {
        return *layout;
    }
    if let Some(layout) = LAYOUT_TABLE.get(&(category, None)) {
        return *layout;
    }
    DEFAULT_LAYOUT
}

#[cfg(test)]
mod tests {
    use super::*;
    use ClothingCategory::*;
    use ClothingSubcategory::*;

    #[test]
    fn test_category_wide_entries() {
        assert_eq!(thumbnail_layout(Tops, None), layout(130.0, 230.0, 35.0));
        assert_eq!(thumbnail_layout(Jackets, None), layout(100.0, 200.0, 30.0));
        assert_eq!(thumbnail_layout(Shoes, None), layout(200.0, 200.0, -55.0));
        assert_eq!(
            thumbnail_layout(Accessories, None),
            layout(140.0, 200.0, 30.0)
        );
        assert_eq!(thumbnail_layout(Other, None), layout(150.0, 260.0, 60.0));
    }

    #[test]
    fn test_category_wide_entry_ignores_subcategory() {
        assert_eq!(
            thumbnail_layout(Tops, Some(Dresses)),
            thumbnail_layout(Tops, None)
        );
        assert_eq!(
            thumbnail_layout(Accessories, Some(Hats)),
            thumbnail_layout(Accessories, None)
        );
    }

    #[test]
    fn test_bottoms_subcategory_entries() {
        assert_eq!(
            thumbnail_layout(Bottoms, Some(Pants)),
            layout(70.0, 170.0, -15.0)
        );
        assert_eq!(
            thumbnail_layout(Bottoms, Some(Shorts)),
            layout(140.0, 240.0, 10.0)
        );
        assert_eq!(
            thumbnail_layout(Bottoms, Some(LongSkirts)),
            layout(70.0, 170.0, -15.0)
        );
        assert_eq!(
            thumbnail_layout(Bottoms, Some(ShortSkirts)),
            layout(140.0, 240.0, 10.0)
        );
    }

    #[test]
    fn test_undergarment_subcategory_entries() {
        assert_eq!(
            thumbnail_layout(Undergarments, Some(Tights)),
            layout(60.0, 160.0, -20.0)
        );
        assert_eq!(
            thumbnail_layout(Undergarments, Some(Socks)),
            layout(140.0, 240.0, -80.0)
        );
    }

    #[test]
    fn test_unmapped_subcategory_falls_back_to_default() {
        assert_eq!(thumbnail_layout(Bottoms, None), DEFAULT_LAYOUT);
        assert_eq!(thumbnail_layout(Bottoms, Some(Jewelry)), DEFAULT_LAYOUT);
        assert_eq!(thumbnail_layout(Undergarments, None), DEFAULT_LAYOUT);
        assert_eq!(
            thumbnail_layout(Undergarments, Some(Bras)),
            DEFAULT_LAYOUT
        );
    }
}
