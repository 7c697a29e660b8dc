//! Entity models
//!
//! Top-level records: [`ClothingItem`], [`Outfit`], [`Trip`]. Outfits hold
//! foreign-key ids, never embedded records, so layering order stays
//! independent of catalog mutation. Foot-style compatibility and image
//! resolution live on [`ClothingItem`].

use crate::catalog::{ClothingCategory, ClothingSubcategory, FootStyle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default hair asset for new outfits
pub const DEFAULT_HAIR_ASSET: &str = "hair_default";

/// Default outfit title substituted when the user leaves it blank
pub const DEFAULT_OUTFIT_TITLE: &str = "Outfit";

/// A single cataloged clothing item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: Uuid,
    pub name: String,
    pub category: ClothingCategory,
    pub subcategory: Option<ClothingSubcategory>,

    /// Generic asset name (tops, accessories, and most items)
    pub image_name: Option<String>,

    /// Foot-style-specific asset variants
    pub image_name_flat: Option<String>,
    pub image_name_heels: Option<String>,

    /// Freeform tags like "winter", "denim", "Zara"
    pub tags: Vec<String>,

    /// Which foot styles this item supports.
    /// None or empty means "no restriction" (e.g. tops, accessories).
    pub supported_foot_styles: Option<Vec<FootStyle>>,
}

impl ClothingItem {
    /// Create a new item with a fresh id and no asset references
    pub fn new(name: impl Into<String>, category: ClothingCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            subcategory: None,
            image_name: None,
            image_name_flat: None,
            image_name_heels: None,
            tags: Vec::new(),
            supported_foot_styles: None,
        }
    }

    /// Whether this item may appear in an outfit with the given foot style
    ///
    /// An absent or empty supported set means no restriction.
    pub fn is_compatible(&self, foot_style: FootStyle) -> bool {
        match &self.supported_foot_styles {
            Some(styles) if !styles.is_empty() => styles.contains(&foot_style),
            _ => true,
        }
    }

    /// Resolve the asset to render for the given foot style
    ///
    /// Compatible items prefer the style-specific variant, falling back to
    /// the generic asset. Incompatible items also fall back to the generic
    /// asset. Returns None when no asset reference of any kind is set.
    pub fn image_for(&self, foot_style: FootStyle) -> Option<&str> {
        if self.is_compatible(foot_style) {
            let specific = match foot_style {
                FootStyle::Flat => self.image_name_flat.as_deref(),
                FootStyle::Heels => self.image_name_heels.as_deref(),
            };
            if let Some(name) = specific {
                return Some(name);
            }
        }
        self.image_name.as_deref()
    }

    /// Resolve a thumbnail asset for contexts with no outfit foot style
    /// (catalog browsing): flat variant, then heels, then generic.
    ///
    /// Lets foot-style-restricted items (e.g. boots only drawn as heels)
    /// still show a thumbnail outside the dressing room.
    pub fn display_image(&self) -> Option<&str> {
        self.image_name_flat
            .as_deref()
            .or(self.image_name_heels.as_deref())
            .or(self.image_name.as_deref())
    }
}

/// A saved or in-progress outfit
///
/// `item_ids` is the layering order: later elements render on top. The
/// consuming display layer stacks base body, feet, each item in sequence
/// order, then hair on top regardless of the sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outfit {
    pub id: Uuid,
    pub title: String,
    /// Ordered clothing item ids for layering
    pub item_ids: Vec<Uuid>,
    /// Optional date to show on the outfit-of-the-day calendar
    pub date: Option<DateTime<Utc>>,
    /// Tags for search in saved outfits
    pub tags: Vec<String>,
    /// Optional trip id if attached to a trip
    pub trip_id: Option<Uuid>,
    /// Per-outfit foot style
    pub foot_style: FootStyle,
    /// Per-outfit hair asset
    pub hair_asset: String,
}

impl Outfit {
    /// Create a new empty outfit with defaults
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            item_ids: Vec::new(),
            date: None,
            tags: Vec::new(),
            trip_id: None,
            foot_style: FootStyle::default(),
            hair_asset: DEFAULT_HAIR_ASSET.to_string(),
        }
    }
}

/// A trip with a date range and a resolved location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
