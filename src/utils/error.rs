use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolsError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("File {} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} returned by {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse grouping of [`ToolsError`] by where the failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    Network,
    Parse,
}

impl ToolsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolsError::InvalidValue { .. } | ToolsError::ConfigError { .. } => {
                ErrorCategory::Validation
            }
            ToolsError::NotFound { .. } | ToolsError::Decode { .. } | ToolsError::Io(_) => {
                ErrorCategory::Filesystem
            }
            ToolsError::Http(_) | ToolsError::HttpStatus { .. } => ErrorCategory::Network,
            ToolsError::Json(_) => ErrorCategory::Parse,
        }
    }

    /// Maps an `io::Error` raised while touching `path`, keeping not-found distinct.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ToolsError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ToolsError::Io(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolsError>;
