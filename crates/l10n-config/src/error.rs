//! Error types for l10n-config

use std::path::PathBuf;

/// Result type for l10n-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read configuration at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
