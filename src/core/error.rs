//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A target file could not be opened
    #[error("cannot open target '{path}': {source}")]
    TargetOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Every slot of the target pool is taken
    #[error("ignoring target '{path}': limit of {capacity} targets reached")]
    TargetPoolExhausted { path: String, capacity: usize },

    /// A configuration line could not be parsed
    #[error("{message} in \"{line}\"")]
    MalformedDirective { line: String, message: String },

    /// A `logger.<tag>` line named a level that does not exist
    #[error("ignoring level \"{value}\" for \"{tag}\"")]
    UnknownLevel { tag: String, value: String },

    /// `configure` called again while the registry rejects reconfiguration
    #[error("logging already configured, refusing to load '{path}'")]
    AlreadyConfigured { path: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn target_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::TargetOpen {
            path: path.into(),
            source,
        }
    }

    pub fn pool_exhausted(path: impl Into<String>, capacity: usize) -> Self {
        LoggerError::TargetPoolExhausted {
            path: path.into(),
            capacity,
        }
    }

    pub fn malformed(line: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::MalformedDirective {
            line: line.into(),
            message: message.into(),
        }
    }

    pub fn unknown_level(tag: impl Into<String>, value: impl Into<String>) -> Self {
        LoggerError::UnknownLevel {
            tag: tag.into(),
            value: value.into(),
        }
    }

    pub fn already_configured(path: impl Into<String>) -> Self {
        LoggerError::AlreadyConfigured { path: path.into() }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
