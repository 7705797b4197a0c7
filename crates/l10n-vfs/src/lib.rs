//! Generic path-addressed trees and structural diffing for Localization
//! Manager
//!
//! This crate carries no domain knowledge. It provides:
//!
//! - [`PathTree`]: an arena-owned tree keyed by slash-separated path
//!   segments, with idempotent insertion and name-ordered traversal
//! - [`diff`]/[`diff_at`]: a tri-state comparison of two independently
//!   typed trees, optionally anchored at a sub-path
//! - [`render`]: a tree renderer that reproduces the traversal order exactly
//!
//! The deterministic child order is load-bearing: reconciliation derives its
//! create/delete ordering from it, not just the display.

pub mod diff;
pub mod error;
pub mod render;
pub mod tree;

pub use diff::{DiffEntry, diff, diff_at};
pub use error::{Error, Result};
pub use render::render;
pub use tree::{NodeId, PathTree, SEPARATOR};
