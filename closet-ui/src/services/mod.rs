//! External collaborators: geocoding and weather lookups

pub mod generation;
pub mod geocoding;
pub mod weather;
