//! Catalog enumerations
//!
//! Closed sets of clothing categories, subcategories, and foot styles.
//! Per-pair presentation behavior (thumbnail layout) is data-driven and
//! lives in [`crate::layout`]; these enums only carry identity, database
//! string round-trips, and display names.

use serde::{Deserialize, Serialize};

/// Top-level clothing category
///
/// Declaration order is arbitrary; on-screen grouping uses
/// [`ClothingCategory::DISPLAY_ORDER`], which follows avatar layering
/// (undergarments at the bottom of the stack, shoes near the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingCategory {
    Accessories,
    Jackets,
    Tops,
    Bottoms,
    Undergarments,
    Other,
    Shoes,
}

impl ClothingCategory {
    /// Fixed display/layering order for grouped views
    pub const DISPLAY_ORDER: [ClothingCategory; 7] = [
        ClothingCategory::Undergarments,
        ClothingCategory::Bottoms,
        ClothingCategory::Tops,
        ClothingCategory::Jackets,
        ClothingCategory::Accessories,
        ClothingCategory::Shoes,
        ClothingCategory::Other,
    ];

    /// Parse category from database string
    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "accessories" => Some(ClothingCategory::Accessories),
            "jackets" => Some(ClothingCategory::Jackets),
            "tops" => Some(ClothingCategory::Tops),
            "bottoms" => Some(ClothingCategory::Bottoms),
            "undergarments" => Some(ClothingCategory::Undergarments),
            "other" => Some(ClothingCategory::Other),
            "shoes" => Some(ClothingCategory::Shoes),
            _ => None,
        }
    }

    /// Convert to canonical database string
    pub fn to_db_string(&self) -> &'static str {
        match self {
            ClothingCategory::Accessories => "accessories",
            ClothingCategory::Jackets => "jackets",
            ClothingCategory::Tops => "tops",
            ClothingCategory::Bottoms => "bottoms",
            ClothingCategory::Undergarments => "undergarments",
            ClothingCategory::Other => "other",
            ClothingCategory::Shoes => "shoes",
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ClothingCategory::Accessories => "Accessories",
            ClothingCategory::Jackets => "Jackets",
            ClothingCategory::Tops => "Tops",
            ClothingCategory::Bottoms => "Bottoms",
            ClothingCategory::Undergarments => "Undergarments",
            ClothingCategory::Other => "Other",
            ClothingCategory::Shoes => "Shoes",
        }
    }

    /// All category variants, useful for form pickers and validation
    pub fn all_variants() -> &'static [ClothingCategory] {
        &[
            ClothingCategory::Accessories,
            ClothingCategory::Jackets,
            ClothingCategory::Tops,
            ClothingCategory::Bottoms,
            ClothingCategory::Undergarments,
            ClothingCategory::Other,
            ClothingCategory::Shoes,
        ]
    }
}

impl std::fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Clothing subcategory
///
/// Scoped loosely by category (pants/shorts/skirts under bottoms,
/// tights/socks under undergarments, and so on); the scoping is advisory,
/// not enforced, matching the add-item form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingSubcategory {
    // Accessories
    Hats,
    Jewelry,
    Bags,
    Belts,
    Scarves,
    Glasses,
    Gloves,
    // Bottoms
    Pants,
    Shorts,
    ShortSkirts,
    LongSkirts,
    // Undergarments
    Bras,
    Underwear,
    Socks,
    Tights,
    // Other
    Dresses,
    Overalls,
    Swimsuits,
    Robes,
    Pajamas,
    Sports,
}

impl ClothingSubcategory {
    /// Parse subcategory from database string
    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "hats" => Some(ClothingSubcategory::Hats),
            "jewelry" => Some(ClothingSubcategory::Jewelry),
            "bags" => Some(ClothingSubcategory::Bags),
            "belts" => Some(ClothingSubcategory::Belts),
            "scarves" => Some(ClothingSubcategory::Scarves),
            "glasses" => Some(ClothingSubcategory::Glasses),
            "gloves" => Some(ClothingSubcategory::Gloves),
            "pants" => Some(ClothingSubcategory::Pants),
            "shorts" => Some(ClothingSubcategory::Shorts),
            "short_skirts" => Some(ClothingSubcategory::ShortSkirts),
            "long_skirts" => Some(ClothingSubcategory::LongSkirts),
            "bras" => Some(ClothingSubcategory::Bras),
            "underwear" => Some(ClothingSubcategory::Underwear),
            "socks" => Some(ClothingSubcategory::Socks),
            "tights" => Some(ClothingSubcategory::Tights),
            "dresses" => Some(ClothingSubcategory::Dresses),
            "overalls" => Some(ClothingSubcategory::Overalls),
            "swimsuits" => Some(ClothingSubcategory::Swimsuits),
            "robes" => Some(ClothingSubcategory::Robes),
            "pajamas" => Some(ClothingSubcategory::Pajamas),
            "sports" => Some(ClothingSubcategory::Sports),
            _ => None,
        }
    }

    /// Convert to canonical database string
    pub fn to_db_string(&self) -> &'static str {
        match self {
            ClothingSubcategory::Hats => "hats",
            ClothingSubcategory::Jewelry => "jewelry",
            ClothingSubcategory::Bags => "bags",
            ClothingSubcategory::Belts => "belts",
            ClothingSubcategory::Scarves => "scarves",
            ClothingSubcategory::Glasses => "glasses",
            ClothingSubcategory::Gloves => "gloves",
            ClothingSubcategory::Pants => "pants",
            ClothingSubcategory::Shorts => "shorts",
            ClothingSubcategory::ShortSkirts => "short_skirts",
            ClothingSubcategory::LongSkirts => "long_skirts",
            ClothingSubcategory::Bras => "bras",
            ClothingSubcategory::Underwear => "underwear",
            ClothingSubcategory::Socks => "socks",
            ClothingSubcategory::Tights => "tights",
            ClothingSubcategory::Dresses => "dresses",
            ClothingSubcategory::Overalls => "overalls",
            ClothingSubcategory::Swimsuits => "swimsuits",
            ClothingSubcategory::Robes => "robes",
            ClothingSubcategory::Pajamas => "pajamas",
            ClothingSubcategory::Sports => "sports",
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ClothingSubcategory::Hats => "Hats",
            ClothingSubcategory::Jewelry => "Jewelry",
            ClothingSubcategory::Bags => "Bags",
            ClothingSubcategory::Belts => "Belts",
            ClothingSubcategory::Scarves => "Scarves",
            ClothingSubcategory::Glasses => "Glasses",
            ClothingSubcategory::Gloves => "Gloves",
            ClothingSubcategory::Pants => "Pants",
            ClothingSubcategory::Shorts => "Shorts",
            ClothingSubcategory::ShortSkirts => "Short Skirts",
            ClothingSubcategory::LongSkirts => "Long Skirts",
            ClothingSubcategory::Bras => "Bras",
            ClothingSubcategory::Underwear => "Underwear",
            ClothingSubcategory::Socks => "Socks",
            ClothingSubcategory::Tights => "Tights",
            ClothingSubcategory::Dresses => "Dresses",
            ClothingSubcategory::Overalls => "Overalls",
            ClothingSubcategory::Swimsuits => "Swimsuits",
            ClothingSubcategory::Robes => "Robes",
            ClothingSubcategory::Pajamas => "Pajamas",
            ClothingSubcategory::Sports => "Sports",
        }
    }

    /// All subcategory variants, useful for form pickers and validation
    pub fn all_variants() -> &'static [ClothingSubcategory] {
        &[
            ClothingSubcategory::Hats,
            ClothingSubcategory::Jewelry,
            ClothingSubcategory::Bags,
            ClothingSubcategory::Belts,
            ClothingSubcategory::Scarves,
            ClothingSubcategory::Glasses,
            ClothingSubcategory::Gloves,
            ClothingSubcategory::Pants,
            ClothingSubcategory::Shorts,
            ClothingSubcategory::ShortSkirts,
            ClothingSubcategory::LongSkirts,
            ClothingSubcategory::Bras,
            ClothingSubcategory::Underwear,
            ClothingSubcategory::Socks,
            ClothingSubcategory::Tights,
            ClothingSubcategory::Dresses,
            ClothingSubcategory::Overalls,
            ClothingSubcategory::Swimsuits,
            ClothingSubcategory::Robes,
            ClothingSubcategory::Pajamas,
            ClothingSubcategory::Sports,
        ]
    }
}

impl std::fmt::Display for ClothingSubcategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-outfit foot style
///
/// Constrains which footwear-dependent items may appear in an outfit and
/// which asset variant of a foot-sensitive item renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootStyle {
    Flat,
    Heels,
}

impl FootStyle {
    /// Parse foot style from database string
    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "flat" => Some(FootStyle::Flat),
            "heels" => Some(FootStyle::Heels),
            _ => None,
        }
    }

    /// Convert to canonical database string
    pub fn to_db_string(&self) -> &'static str {
        match self {
            FootStyle::Flat => "flat",
            FootStyle::Heels => "heels",
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FootStyle::Flat => "Flat",
            FootStyle::Heels => "Heels",
        }
    }

    /// Avatar feet asset rendered beneath the clothing layers
    pub fn asset_name(&self) -> &'static str {
        match self {
            FootStyle::Flat => "avatar_feet_flat",
            FootStyle::Heels => "avatar_feet_heels",
        }
    }

    /// Both foot style variants
    pub fn all_variants() -> &'static [FootStyle] {
        &[FootStyle::Flat, FootStyle::Heels]
    }
}

impl Default for FootStyle {
    /// New outfits default to flat feet
    fn default() -> Self {
        FootStyle::Flat
    }
}

impl std::fmt::Display for FootStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
