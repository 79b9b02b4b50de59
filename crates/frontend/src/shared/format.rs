/// Utilities for display formatting
///
/// Keeps file-size and timestamp rendering consistent across pages.
use chrono::{DateTime, Utc};

/// Format a byte count as megabytes with two decimals.
/// Example: 2_621_440.0 -> "2.50 MB"
pub fn format_file_size(bytes: f64) -> String {
    format!("{:.2} MB", bytes / (1024.0 * 1024.0))
}

/// Format a timestamp as a 12-hour clock time.
/// Example: 14:07 -> "02:07 PM"
pub fn format_clock_time(ts: &DateTime<Utc>) -> String {
    ts.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(2.5 * 1024.0 * 1024.0), "2.50 MB");
        assert_eq!(format_file_size(0.0), "0.00 MB");
        assert_eq!(format_file_size(512.0 * 1024.0), "0.50 MB");
    }

    #[test]
    fn test_format_clock_time() {
        let afternoon = Utc.with_ymd_and_hms(2024, 3, 15, 14, 7, 0).unwrap();
        assert_eq!(format_clock_time(&afternoon), "02:07 PM");

        let morning = Utc.with_ymd_and_hms(2024, 3, 15, 0, 5, 0).unwrap();
        assert_eq!(format_clock_time(&morning), "12:05 AM");
    }
}
