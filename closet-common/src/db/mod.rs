//! Database models and queries

pub mod init;
pub mod items;
pub mod models;
pub mod outfits;
pub mod trips;

pub use init::*;
pub use models::*;
