//! # hierlog
//!
//! A config-file driven line logger with hierarchical logger names.
//!
//! ## Features
//!
//! - **Hierarchical names**: `Net.Connector::Handshake` inherits level and
//!   target from `Net.Connector`, then `Net`
//! - **Plain-text configuration**: `rootLogger=app.log`,
//!   `logger.Net=DEBUG,net.log`
//! - **Multiple targets**: a bounded pool of files (or `STDOUT`/`STDERR`)
//! - **Never fails the caller**: logging calls cannot panic or return errors
//!
//! ## Example
//!
//! ```no_run
//! use hierlog::{info, Arg};
//!
//! hierlog::configure("logging.properties").unwrap();
//!
//! let logger = hierlog::get_logger("Net.Connector");
//! logger.info("connected to {} on port {}", &[Arg::from("10.0.0.1"), Arg::from(500u16)]);
//! info!(logger, "handshake took {}ms", 12);
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, Arg, LogEntry, LogLevel, Logger, LoggerError, ReconfigurePolicy, Registry,
        RegistryBuilder, RegistrySnapshot, Result, TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender};
pub use crate::core::{
    format_line, render_template, Appender, Arg, LogEntry, LogLevel, Logger, LoggerError,
    ReconfigurePolicy, Registry, RegistryBuilder, RegistrySnapshot, Result, TargetId,
    TimestampFormat, DEFAULT_TARGET_CAPACITY,
};

use std::path::Path;

/// Configure the process-wide registry from a file.
///
/// Returns `Ok(false)` without changing anything when the file does not exist
/// or the registry is already configured.
pub fn configure(path: impl AsRef<Path>) -> Result<bool> {
    Registry::global().configure(path)
}

/// Get a logger handle from the process-wide registry.
pub fn get_logger(name: impl Into<String>) -> Logger {
    Registry::global().logger(name)
}
