//! Configuration loading for Localization Manager
//!
//! Defines the YAML configuration that declares the files to upload, how
//! they are represented remotely, and how translations are copied back to
//! the file system, plus the token substitution applied to every value.

pub mod error;
pub mod model;
pub mod tokens;

pub use error::{Error, Result};
pub use model::{FileSet, PathPair, ProjectConfig, SourceConfig, SyncConfiguration};
pub use tokens::TokenReplacer;
