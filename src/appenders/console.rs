//! Console appender implementation

use crate::core::formatter::format_line;
use crate::core::{Appender, LogEntry, Result, TimestampFormat};
use crate::core::config::{TARGET_STDERR, TARGET_STDOUT};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes lines to stdout or stderr.
///
/// Selected in configuration with the target names `STDOUT` and `STDERR`.
pub struct ConsoleAppender {
    stream: ConsoleStream,
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl ConsoleAppender {
    pub fn new(stream: ConsoleStream) -> Self {
        Self {
            stream,
            use_colors: false,
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleStream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr)
    }

    /// Colorize the level tag. Has no effect without the `console` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }

    #[cfg(feature = "console")]
    fn format_text(&self, entry: &LogEntry) -> String {
        use colored::Colorize;

        if !self.use_colors {
            return format_line(entry, &self.timestamp_format);
        }

        format!(
            "{} [{}] {} {}",
            self.timestamp_format.format(&entry.timestamp),
            entry.level.to_str().color(entry.level.color_code()),
            entry.logger,
            entry.message
        )
    }

    #[cfg(not(feature = "console"))]
    fn format_text(&self, entry: &LogEntry) -> String {
        format_line(entry, &self.timestamp_format)
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.format_text(entry);

        match self.stream {
            ConsoleStream::Stdout => writeln!(std::io::stdout().lock(), "{}", output)?,
            ConsoleStream::Stderr => writeln!(std::io::stderr().lock(), "{}", output)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => TARGET_STDOUT,
            ConsoleStream::Stderr => TARGET_STDERR,
        }
    }
}
