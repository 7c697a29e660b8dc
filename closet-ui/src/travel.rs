//! Trip association, outfit-of-the-day lookups, packing lists, and
//! outfit search

use chrono::{DateTime, Utc};
use closet_common::db::models::{Outfit, Trip};
use closet_common::time::{date_in_range, same_calendar_day};
use uuid::Uuid;

/// The trip whose inclusive date range contains `date`, if any
///
/// Ranges are compared by calendar day. When trips overlap the first in
/// list order wins.
pub fn active_trip<'a>(trips: &'a [Trip], date: DateTime<Utc>) -> Option<&'a Trip> {
    trips
        .iter()
        .find(|trip| date_in_range(date, trip.start_date, trip.end_date))
}

/// Outfits whose date falls on the same calendar day as `date`
pub fn outfits_for_date<'a>(outfits: &'a [Outfit], date: DateTime<Utc>) -> Vec<&'a Outfit> {
    outfits
        .iter()
        .filter(|outfit| match outfit.date {
            Some(d) => same_calendar_day(d, date),
            None => false,
        })
        .collect()
}

/// Outfits explicitly attached to a trip
pub fn outfits_for_trip<'a>(outfits: &'a [Outfit], trip_id: Uuid) -> Vec<&'a Outfit> {
    outfits
        .iter()
        .filter(|outfit| outfit.trip_id == Some(trip_id))
        .collect()
}

/// Packing list for a trip: the deduplicated union of item ids across
/// all of the trip's outfits, in first-seen order
pub fn packing_list(outfits: &[Outfit], trip_id: Uuid) -> Vec<Uuid> {
    let mut seen = Vec::new();
    for outfit in outfits.iter().filter(|o| o.trip_id == Some(trip_id)) {
        for id in &outfit.item_ids {
            if !seen.contains(id) {
                seen.push(*id);
            }
        }
    }
    seen
}

/// Case-insensitive substring search over outfit title and tags
///
/// Tags are matched against their space-joined concatenation, so a query
/// can span tag boundaries. A blank query matches everything.
pub fn search_outfits<'a>(outfits: &'a [Outfit], query: &str) -> Vec<&'a Outfit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return outfits.iter().collect();
    }
    outfits
        .iter()
        .filter(|outfit| {
            outfit.title.to_lowercase().contains(&needle)
                || outfit.tags.join(" ").to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn trip(name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            name: name.to_string(),
            start_date: start,
            end_date: end,
            location_name: "Paris".to_string(),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn test_active_trip_inclusive_bounds() {
        let t = trip("Paris", utc(2025, 6, 10, 12), utc(2025, 6, 14, 9));
        let trips = vec![t.clone()];

        // Boundary days match regardless of time-of-day
        assert_eq!(active_trip(&trips, utc(2025, 6, 10, 0)).map(|t| t.id), Some(t.id));
        assert_eq!(active_trip(&trips, utc(2025, 6, 14, 23)).map(|t| t.id), Some(t.id));
        assert_eq!(active_trip(&trips, utc(2025, 6, 12, 3)).map(|t| t.id), Some(t.id));
        assert!(active_trip(&trips, utc(2025, 6, 9, 23)).is_none());
        assert!(active_trip(&trips, utc(2025, 6, 15, 0)).is_none());
    }

    #[test]
    fn test_outfits_for_date_same_calendar_day() {
        let mut dated = Outfit::new("Dated");
        dated.date = Some(utc(2025, 6, 12, 8));
        let undated = Outfit::new("Undated");
        let outfits = vec![dated.clone(), undated];

        let found = outfits_for_date(&outfits, utc(2025, 6, 12, 22));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, dated.id);
        assert!(outfits_for_date(&outfits, utc(2025, 6, 13, 0)).is_empty());
    }

    #[test]
    fn test_packing_list_first_seen_union() {
        let trip_id = Uuid::new_v4();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();

        let mut first = Outfit::new("Day 1");
        first.trip_id = Some(trip_id);
        first.item_ids = vec![a, b];

        let mut second = Outfit::new("Day 2");
        second.trip_id = Some(trip_id);
        second.item_ids = vec![b, c];

        let mut unrelated = Outfit::new("Home");
        unrelated.item_ids = vec![Uuid::new_v4()];

        let list = packing_list(&[first, second, unrelated], trip_id);
        assert_eq!(list, vec![a, b, c]);
    }

    #[test]
    fn test_packing_list_empty_trip() {
        assert!(packing_list(&[], Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_search_title_case_insensitive() {
        let brunch = Outfit::new("Sunday Brunch");
        let outfits = vec![brunch.clone(), Outfit::new("Gym")];

        let found = search_outfits(&outfits, "bRuNcH");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, brunch.id);
    }

    #[test]
    fn test_search_spans_tag_boundaries() {
        let mut tagged = Outfit::new("Outfit");
        tagged.tags = vec!["cozy".to_string(), "fall".to_string()];
        let outfits = vec![tagged.clone()];

        // Space-joined tags let a query cross the tag seam
        assert_eq!(search_outfits(&outfits, "cozy fall").len(), 1);
        assert_eq!(search_outfits(&outfits, "FALL").len(), 1);
        assert!(search_outfits(&outfits, "winter").is_empty());
    }

    #[test]
    fn test_blank_query_matches_all() {
        let outfits = vec![Outfit::new("A"), Outfit::new("B")];
        assert_eq!(search_outfits(&outfits, "   ").len(), 2);
    }
}
