//! Timestamp display formatting.
//!
//! Timestamps render in a fixed UTC-locked form ("January 5, 2024 3:45 PM")
//! regardless of the viewer's timezone, so every reader sees the same date.

use chrono::{DateTime, Utc};

/// Render an ISO-8601 UTC string for display. Unparseable input renders as
/// an empty string rather than breaking the card.
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(ts) => ts
            .with_timezone(&Utc)
            .format("%B %-d, %Y %-I:%M %p")
            .to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_utc_timestamp_with_unpadded_day_and_hour() {
        assert_eq!(format_date("2024-01-05T15:45:00Z"), "January 5, 2024 3:45 PM");
    }

    #[test]
    fn formats_morning_hours_with_am() {
        assert_eq!(format_date("2023-11-20T09:05:00Z"), "November 20, 2023 9:05 AM");
    }

    #[test]
    fn stays_locked_to_utc_for_offset_input() {
        // 18:45+03:00 is 15:45 UTC
        assert_eq!(
            format_date("2024-01-05T18:45:00+03:00"),
            "January 5, 2024 3:45 PM"
        );
    }

    #[test]
    fn unparseable_input_renders_empty() {
        assert_eq!(format_date("not a date"), "");
        assert_eq!(format_date(""), "");
    }
}
