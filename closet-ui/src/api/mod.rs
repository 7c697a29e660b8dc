//! HTTP API handlers for closet-ui

pub mod closet;
pub mod dressing_room;
pub mod geocode;
pub mod health;
pub mod items;
pub mod ootd;
pub mod outfits;
pub mod trips;

pub use health::health_routes;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ApiError;

/// Serde helper distinguishing an absent PATCH field from an explicit
/// null: absent = keep the stored value, null = clear it
pub(crate) mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer).map(Some)
    }
}

/// Parse a YYYY-MM-DD query value into a UTC midnight timestamp
pub(crate) fn parse_date_param(value: &str) -> Result<DateTime<Utc>, ApiError> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", value)))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid date '{}'", value)))?;
    Ok(midnight.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_param() {
        let parsed = parse_date_param("2025-06-12").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-06-12T00:00:00+00:00");
        assert!(parse_date_param("06/12/2025").is_err());
        assert!(parse_date_param("").is_err());
    }
}
