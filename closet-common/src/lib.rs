//! # MyCloset Common Library
//!
//! Shared code for the MyCloset wardrobe application including:
//! - Catalog enumerations (categories, subcategories, foot styles)
//! - Entity models and foot-style compatibility resolution
//! - Category/subcategory grouping and thumbnail layout tables
//! - Database schema, queries, and default wardrobe seeding
//! - Configuration loading
//! - Utility functions

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod grouping;
pub mod layout;
pub mod seed;
pub mod time;

pub use catalog::{ClothingCategory, ClothingSubcategory, FootStyle};
pub use db::models::{ClothingItem, Outfit, Trip};
pub use error::{Error, Result};
