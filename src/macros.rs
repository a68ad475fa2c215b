//! Logging macros.
//!
//! The macros check the level before building the argument list, so disabled
//! calls cost a level lookup and nothing else. Arguments are converted with
//! [`Arg::from`](crate::Arg); passing an unsupported type is a compile error.
//!
//! # Examples
//!
//! ```
//! use hierlog::prelude::*;
//! use hierlog::info;
//!
//! let registry = Registry::builder().build_shared();
//! registry.configure_str("inline", "").unwrap();
//! let logger = registry.logger("server");
//!
//! info!(logger, "Server started");
//!
//! let port = 8080u16;
//! info!(logger, "Server listening on port {}", port);
//!
//! let user = String::from("alice");
//! info!(logger, "User {} performed action: {}", &user, "login");
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let registry = Registry::builder().build_shared();
/// # let logger = registry.logger("doc");
/// use hierlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        let logger = &$logger;
        let level: $crate::LogLevel = $level;
        if logger.is_enabled(level) {
            logger.log(level, $template, &[$($crate::Arg::from($arg)),*]);
        }
    }};
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let registry = Registry::builder().build_shared();
/// # let logger = registry.logger("doc");
/// use hierlog::error;
/// error!(logger, "Failed to connect to {}", "database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
