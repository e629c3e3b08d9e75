//! Helper functions and utilities
//!
//! Display formatting shared by the CLI and anything else rendering
//! backend records.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a backend timestamp. Accepts RFC 3339 and naive ISO timestamps
/// (taken as UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Long date for listings, e.g. "September 13, 2025 at 02:30 PM"
pub fn format_long_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y at %I:%M %p").to_string()
}

/// Format a backend timestamp for display, falling back to the raw text
pub fn format_created_at(value: Option<&str>) -> String {
    match value {
        Some(raw) => parse_timestamp(raw)
            .map(format_long_date)
            .unwrap_or_else(|| raw.to_string()),
        None => "unknown date".to_string(),
    }
}

/// File size in megabytes with two decimals
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339_and_naive() {
        let expected = Utc.with_ymd_and_hms(2025, 9, 13, 14, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2025-09-13T14:30:00+00:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-09-13T14:30:00.000000"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_format_long_date() {
        let ts = Utc.with_ymd_and_hms(2025, 9, 3, 14, 5, 0).unwrap();
        assert_eq!(format_long_date(ts), "September 3, 2025 at 02:05 PM");
    }

    #[test]
    fn test_format_created_at_falls_back_to_raw() {
        assert_eq!(format_created_at(Some("sometime")), "sometime");
        assert_eq!(format_created_at(None), "unknown date");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(5 * 1024 * 1024 / 2), "2.50 MB");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("We would like to sponsor", 10), "We woul...");
    }
}
