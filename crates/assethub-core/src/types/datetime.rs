//! Timestamp display formatting.
//!
//! Record timestamps are rendered in the localized day-first form used by
//! both the JSON listing and the CSV export.

use chrono::{DateTime, Utc};

/// Display format for record timestamps: `DD/MM/YYYY HH:MM`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_first_format() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 59).unwrap();
        assert_eq!(format_timestamp(ts), "07/03/2025 14:05");
    }
}
