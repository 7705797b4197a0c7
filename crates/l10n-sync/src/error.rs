//! Error types for l10n-sync

use std::path::PathBuf;

use crate::remote::RemoteId;

/// Result type for l10n-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building trees or reconciling them
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the tree core
    #[error(transparent)]
    Vfs(#[from] l10n_vfs::Error),

    /// Error from configuration handling
    #[error(transparent)]
    Config(#[from] l10n_config::Error),

    /// Standard I/O error with the affected path
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error walking a directory tree
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("The source dir {path} does not exist (resolved from {base} and {dir})")]
    MissingSourceDir {
        path: PathBuf,
        base: PathBuf,
        dir: String,
    },

    #[error("The source dir {path} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Invalid include pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to enumerate {dir}: {source}")]
    Enumerate {
        dir: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// Two local files mapped to the same remote path
    #[error("Remote path {path} clashes between {existing} and {incoming}")]
    PathClash {
        path: String,
        existing: PathBuf,
        incoming: PathBuf,
    },

    #[error("Remote record {name:?} references unknown parent directory {parent}")]
    UnknownParent { name: String, parent: RemoteId },

    #[error("Cycle in remote directory parents at {id}")]
    ParentCycle { id: RemoteId },

    #[error("Remote tree has no record at {path}")]
    MissingRemoteRecord { path: String },

    /// A mutation-port call failed; the remote diagnostic is kept verbatim
    #[error("Remote operation failed: {message}")]
    Remote { message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }
}
