//! Timestamp formatting for line headers
//!
//! Timestamps are local wall-clock time. The default layout is
//! `2025/01/08T10:30:45`.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp layout used in line headers
///
/// # Examples
///
/// ```
/// use hierlog::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let when = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).single().unwrap();
/// assert_eq!(TimestampFormat::Classic.format(&when), "2025/01/08T10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `YYYY/MM/DDTHH:MM:SS`, zero padded
    #[default]
    Classic,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Custom strftime format
    ///
    /// ```
    /// use hierlog::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Classic => datetime.format("%Y/%m/%dT%H:%M:%S").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            TimestampFormat::Classic => "local date and time (2025/01/08T10:30:45)",
            TimestampFormat::Iso8601 => "ISO 8601 with milliseconds (2025-01-08T10:30:45.123+01:00)",
            TimestampFormat::Rfc3339 => "RFC 3339 with timezone (2025-01-08T10:30:45+01:00)",
            TimestampFormat::Custom(_) => "Custom strftime format",
        }
    }
}
