//! Error types for the file logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Log target exists but is not writable, could not be opened, or a write failed
    #[error("Permission denied for '{path}': {message}")]
    PermissionDenied {
        path: String,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Log directory could not be created
    #[error("Failed to create log directory '{path}'")]
    DirectoryCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Unknown level name or otherwise unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Write attempted on a writer without an open handle
    #[error("Log writer has no open file handle")]
    NotOpened,

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a permission error without an underlying IO cause
    pub fn permission(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::PermissionDenied {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a permission error caused by an IO failure
    pub fn permission_io(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::PermissionDenied {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn directory(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LoggerError::InvalidArgument(msg.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Whether this error belongs to the permission family
    pub fn is_permission(&self) -> bool {
        matches!(self, LoggerError::PermissionDenied { .. })
    }
}
