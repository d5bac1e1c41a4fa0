//! Date/time utilities for listing output.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::config::DisplayConfig;

/// Format a DateTime<Utc> to the specified timezone.
///
/// # Arguments
///
/// * `dt` - DateTime in UTC
/// * `timezone` - Timezone name (e.g., "Asia/Taipei", "UTC")
/// * `format` - Output format string (e.g., "%Y-%m-%d %H:%M:%S")
///
/// Falls back to UTC when the timezone name is unknown.
pub fn format_utc_datetime(dt: &DateTime<Utc>, timezone: &str, format: &str) -> String {
    let tz: Tz = match timezone.parse() {
        Ok(tz) => tz,
        Err(_) => return dt.format(format).to_string(),
    };
    dt.with_timezone(&tz).format(format).to_string()
}

/// Format a creation timestamp using the display configuration.
pub fn format_created(dt: &DateTime<Utc>, display: &DisplayConfig) -> String {
    format_utc_datetime(dt, &display.timezone, &display.time_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_utc_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let result = format_utc_datetime(&dt, "Asia/Tokyo", "%Y/%m/%d %H:%M");
        assert_eq!(result, "2024/01/15 19:30"); // UTC+9
    }

    #[test]
    fn test_format_utc_datetime_utc() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let result = format_utc_datetime(&dt, "UTC", "%Y-%m-%d %H:%M:%S");
        assert_eq!(result, "2024-01-15 10:30:00");
    }

    #[test]
    fn test_format_utc_datetime_invalid_timezone() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let result = format_utc_datetime(&dt, "Invalid/Zone", "%Y/%m/%d %H:%M");
        assert_eq!(result, "2024/01/15 10:30");
    }

    #[test]
    fn test_format_created_default_display() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let result = format_created(&dt, &DisplayConfig::default());
        assert_eq!(result, "2023-12-31 23:59:59");
    }

    #[test]
    fn test_format_created_crosses_date_line() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 31, 20, 0, 0).unwrap();
        let display = DisplayConfig {
            timezone: "Asia/Taipei".to_string(),
            time_format: "%Y-%m-%d %H:%M".to_string(),
        };
        assert_eq!(format_created(&dt, &display), "2024-01-01 04:00");
    }
}
