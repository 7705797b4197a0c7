//! Error types for l10n-vfs

/// Result type for l10n-vfs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or comparing path trees
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("The path must not be empty")]
    EmptyPath,

    #[error("Empty segment in path {path:?}")]
    EmptySegment { path: String },

    #[error("Anchor path not found in the compared tree: {path}")]
    AnchorNotFound { path: String },
}
