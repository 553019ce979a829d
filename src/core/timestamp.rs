//! Timestamp formatting utilities
//!
//! Log timestamps are taken in local time and truncated to microsecond
//! precision, so sub-second specifiers always carry real microseconds no
//! matter which format is selected.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, SubsecRound};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// strftime pattern behind [`TimestampFormat::Standard`]
pub const STANDARD_PATTERN: &str = "%Y-%m-%d %-H:%M:%S%.6f";

/// Timestamp format options
///
/// Serialized as a plain string: one of the preset names (`standard`,
/// `iso8601-micros`, `rfc3339`, `unix-micros`) or any strftime pattern.
/// Custom patterns are checked with [`TimestampFormat::validate`].
///
/// # Examples
///
/// ```
/// use rust_file_logger::TimestampFormat;
///
/// let format: TimestampFormat = "%d/%b/%Y:%H:%M:%S".into();
/// assert_eq!(format, TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimestampFormat {
    /// Date, hour without padding, microseconds: `2025-01-08 9:30:45.123456`
    #[default]
    Standard,

    /// ISO 8601 with microseconds and offset: `2025-01-08T09:30:45.123456+01:00`
    Iso8601Micros,

    /// RFC 3339: `2025-01-08T09:30:45.123456+01:00`
    Rfc3339,

    /// Unix timestamp in microseconds: `1736325045123456`
    UnixMicros,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format a timestamp according to this format
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidConfiguration`] if a custom pattern cannot be rendered
    pub fn format(&self, datetime: &DateTime<Local>) -> Result<String> {
        let formatted = match self {
            TimestampFormat::Standard => datetime.format(STANDARD_PATTERN).to_string(),
            TimestampFormat::Iso8601Micros => {
                datetime.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
            }
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(pattern))
                    .map_err(|_| invalid_pattern(pattern))?;
                out
            }
        };
        Ok(formatted)
    }

    /// Reject custom patterns containing unknown or malformed specifiers
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(pattern) = self {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(invalid_pattern(pattern));
            }
        }
        Ok(())
    }
}

fn invalid_pattern(pattern: &str) -> LoggerError {
    LoggerError::config(
        "TimestampFormat",
        format!("invalid strftime pattern '{}'", pattern),
    )
}

/// Current local time truncated to microseconds
pub fn now() -> DateTime<Local> {
    Local::now().trunc_subsecs(6)
}

impl From<String> for TimestampFormat {
    fn from(s: String) -> Self {
        match s.as_str() {
            "standard" => TimestampFormat::Standard,
            "iso8601-micros" => TimestampFormat::Iso8601Micros,
            "rfc3339" => TimestampFormat::Rfc3339,
            "unix-micros" => TimestampFormat::UnixMicros,
            _ => TimestampFormat::Custom(s),
        }
    }
}

impl From<&str> for TimestampFormat {
    fn from(s: &str) -> Self {
        TimestampFormat::from(s.to_string())
    }
}

impl From<TimestampFormat> for String {
    fn from(format: TimestampFormat) -> Self {
        match format {
            TimestampFormat::Standard => "standard".to_string(),
            TimestampFormat::Iso8601Micros => "iso8601-micros".to_string(),
            TimestampFormat::Rfc3339 => "rfc3339".to_string(),
            TimestampFormat::UnixMicros => "unix-micros".to_string(),
            TimestampFormat::Custom(pattern) => pattern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn fixed_datetime() -> DateTime<Local> {
        // 2025-01-08 09:30:45.123456 local
        Local
            .with_ymd_and_hms(2025, 1, 8, 9, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_standard_format() {
        let result = TimestampFormat::Standard.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08 9:30:45.123456");
    }

    #[test]
    fn test_iso8601_micros_format() {
        let result = TimestampFormat::Iso8601Micros.format(&fixed_datetime()).unwrap();
        assert!(result.starts_with("2025-01-08T09:30:45.123456"));
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()).unwrap(), "2025/01/08 09:30");
    }

    #[test]
    fn test_bad_custom_pattern_is_an_error() {
        let format = TimestampFormat::Custom("%Q bad".to_string());
        assert!(matches!(
            format.validate(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            format.format(&fixed_datetime()),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_valid_patterns_pass_validation() {
        assert!(TimestampFormat::Custom("%Y-%m-%d %H:%M:%S%.6f".to_string())
            .validate()
            .is_ok());
        assert!(TimestampFormat::Standard.validate().is_ok());
    }

    #[test]
    fn test_unix_micros_is_numeric() {
        let result = TimestampFormat::UnixMicros.format(&fixed_datetime()).unwrap();
        let parsed: i64 = result.parse().expect("valid unix micros timestamp");
        assert_eq!(parsed % 1_000_000, 123456);
    }

    #[test]
    fn test_now_has_microsecond_precision() {
        let ts = now();
        assert_eq!(ts.nanosecond() % 1_000, 0);
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!(TimestampFormat::from("rfc3339"), TimestampFormat::Rfc3339);
        assert_eq!(
            TimestampFormat::from("%H"),
            TimestampFormat::Custom("%H".to_string())
        );
        assert_eq!(String::from(TimestampFormat::Standard), "standard");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::Iso8601Micros).expect("serialize");
        assert_eq!(json, "\"iso8601-micros\"");

        let format: TimestampFormat = serde_json::from_str("\"%Y-%m-%d\"").expect("deserialize");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
