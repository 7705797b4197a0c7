//! Synchronization layer for Localization Manager
//!
//! Builds the two sides of a synchronization pass and reconciles them:
//!
//! - [`local::build_local_tree`]: enumerate configured source files into a
//!   [`l10n_vfs::PathTree`] addressed by remote paths
//! - [`remote::RemoteTree`]: rebuild the remote hierarchy from flat
//!   directory/file records
//! - [`upload::Reconciler`]: drive create/update/delete calls against a
//!   [`port::RemotePort`] from the structural diff of the two trees
//! - [`copy::TranslationsCopier`]: copy translated files from extracted
//!   packages back into the project tree
//!
//! Execution is strictly sequential; the only blocking boundary is the
//! remote port, and a failing call aborts the whole pass.

pub mod copy;
pub mod error;
pub mod local;
pub mod planning;
pub mod port;
pub mod remote;
pub mod upload;

pub use copy::TranslationsCopier;
pub use error::{Error, Result};
pub use local::{ExportOptions, ImportOptions, LocalEntry, LocalTree, build_local_tree};
pub use planning::{PlannedOperation, PlanningPort};
pub use port::RemotePort;
pub use remote::{DirectoryRecord, FileRecord, RemoteId, RemoteItem, RemoteSnapshot, RemoteTree};
pub use upload::Reconciler;
