//! The mutation surface of the remote service

use crate::Result;
use crate::local::LocalEntry;
use crate::remote::{DirectoryRecord, FileRecord, RemoteId, RemoteItem};

/// Mutation operations the reconciler drives against the remote service.
///
/// Implementations own transport, pagination, and authentication. Every call
/// is a single blocking round trip; a failure aborts the current
/// reconciliation pass and is surfaced verbatim, with no retries and no
/// rollback of already-applied operations.
pub trait RemotePort {
    /// Create a directory under `parent_id` (`None` places it under the
    /// project root).
    fn create_directory(
        &mut self,
        parent_id: Option<RemoteId>,
        name: &str,
    ) -> Result<DirectoryRecord>;

    /// Upload a new file under `parent_id`.
    fn create_file(
        &mut self,
        parent_id: Option<RemoteId>,
        entry: &LocalEntry,
    ) -> Result<FileRecord>;

    /// Replace the content and options of an existing remote file.
    fn update_file(&mut self, id: RemoteId, entry: &LocalEntry) -> Result<FileRecord>;

    /// Delete a file or directory.
    fn delete(&mut self, item: &RemoteItem) -> Result<()>;
}
