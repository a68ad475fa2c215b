//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// One rendered log line, before the header is applied.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub logger: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(level: LogLevel, logger: impl Into<String>, message: String) -> Self {
        Self {
            level,
            logger: logger.into(),
            message,
            timestamp: Local::now(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
