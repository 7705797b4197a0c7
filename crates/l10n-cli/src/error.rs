//! Error types for l10n-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from l10n-sync
    #[error(transparent)]
    Sync(#[from] l10n_sync::Error),

    /// Error from l10n-config
    #[error(transparent)]
    Config(#[from] l10n_config::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A remote snapshot file could not be parsed
    #[error("Failed to parse snapshot {path}: {message}")]
    Snapshot { path: PathBuf, message: String },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
