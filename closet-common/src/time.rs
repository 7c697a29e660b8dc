//! Timestamp utilities

use chrono::{DateTime, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Calendar-day equality (UTC), ignoring time of day
pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Whether `date` falls inside [start, end] at calendar-day granularity
pub fn date_in_range(date: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    let d = date.date_naive();
    start.date_naive() <= d && d <= end.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_now_returns_valid_timestamp() {
        let timestamp = now();
        // Should be a reasonable timestamp (after year 2000)
        assert!(timestamp.timestamp() > 946_684_800);
    }

    #[test]
    fn test_same_calendar_day_ignores_time() {
        assert!(same_calendar_day(ts(2025, 6, 3, 0), ts(2025, 6, 3, 23)));
        assert!(!same_calendar_day(ts(2025, 6, 3, 23), ts(2025, 6, 4, 0)));
    }

    #[test]
    fn test_date_in_range_inclusive_bounds() {
        let start = ts(2025, 6, 1, 12);
        let end = ts(2025, 6, 5, 8);
        assert!(date_in_range(ts(2025, 6, 1, 0), start, end));
        assert!(date_in_range(ts(2025, 6, 3, 15), start, end));
        assert!(date_in_range(ts(2025, 6, 5, 23), start, end));
        assert!(!date_in_range(ts(2025, 5, 31, 23), start, end));
        assert!(!date_in_range(ts(2025, 6, 6, 0), start, end));
    }
}
