//! Core logger types and traits

pub mod appender;
pub mod arg;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod name;
pub mod registry;
pub mod snapshot;
pub mod target_pool;
pub mod timestamp;

pub use appender::Appender;
pub use arg::Arg;
pub use error::{LoggerError, Result};
pub use formatter::{format_line, render_template};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use registry::{ReconfigurePolicy, Registry, RegistryBuilder, TargetId};
pub use snapshot::RegistrySnapshot;
pub use target_pool::{TargetPool, DEFAULT_TARGET_CAPACITY};
pub use timestamp::TimestampFormat;
