//! Offline port that records the operations a pass would issue

use std::fmt;

use crate::Result;
use crate::local::LocalEntry;
use crate::port::RemotePort;
use crate::remote::{DirectoryRecord, FileRecord, RemoteId, RemoteItem};

/// One remote mutation the reconciler decided on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedOperation {
    CreateDirectory {
        parent_id: Option<RemoteId>,
        name: String,
    },
    CreateFile {
        parent_id: Option<RemoteId>,
        name: String,
    },
    UpdateFile {
        id: RemoteId,
        name: String,
    },
    Delete {
        id: RemoteId,
        name: String,
        directory: bool,
    },
}

impl fmt::Display for PlannedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn parent(parent_id: Option<RemoteId>) -> String {
            match parent_id {
                Some(id) => format!("directory #{id}"),
                None => "the root".to_string(),
            }
        }

        match self {
            Self::CreateDirectory { parent_id, name } => {
                write!(f, "create directory {name:?} under {}", parent(*parent_id))
            }
            Self::CreateFile { parent_id, name } => {
                write!(f, "create file {name:?} under {}", parent(*parent_id))
            }
            Self::UpdateFile { id, name } => write!(f, "update file #{id} ({name:?})"),
            Self::Delete {
                id,
                name,
                directory,
            } => {
                let kind = if *directory { "directory" } else { "file" };
                write!(f, "delete {kind} #{id} ({name:?})")
            }
        }
    }
}

/// A [`RemotePort`] that mutates nothing: it hands out synthetic ids and
/// records every operation in call order, for dry runs and tests.
#[derive(Debug)]
pub struct PlanningPort {
    operations: Vec<PlannedOperation>,
    next_id: RemoteId,
}

impl PlanningPort {
    /// Synthetic ids start at this offset to stand apart from snapshot ids.
    const SYNTHETIC_ID_BASE: RemoteId = 1_000_000;

    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            next_id: Self::SYNTHETIC_ID_BASE,
        }
    }

    /// The operations recorded so far, in call order.
    pub fn operations(&self) -> &[PlannedOperation] {
        &self.operations
    }

    /// Consume the port, returning the recorded operations.
    pub fn into_operations(self) -> Vec<PlannedOperation> {
        self.operations
    }

    fn allocate_id(&mut self) -> RemoteId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for PlanningPort {
    fn default() -> Self {
        Self::new()
    }
}

impl RemotePort for PlanningPort {
    fn create_directory(
        &mut self,
        parent_id: Option<RemoteId>,
        name: &str,
    ) -> Result<DirectoryRecord> {
        self.operations.push(PlannedOperation::CreateDirectory {
            parent_id,
            name: name.to_string(),
        });
        Ok(DirectoryRecord {
            id: self.allocate_id(),
            name: name.to_string(),
            parent_id,
        })
    }

    fn create_file(
        &mut self,
        parent_id: Option<RemoteId>,
        entry: &LocalEntry,
    ) -> Result<FileRecord> {
        self.operations.push(PlannedOperation::CreateFile {
            parent_id,
            name: entry.name.clone(),
        });
        Ok(FileRecord {
            id: self.allocate_id(),
            name: entry.name.clone(),
            directory_id: parent_id,
        })
    }

    fn update_file(&mut self, id: RemoteId, entry: &LocalEntry) -> Result<FileRecord> {
        self.operations.push(PlannedOperation::UpdateFile {
            id,
            name: entry.name.clone(),
        });
        Ok(FileRecord {
            id,
            name: entry.name.clone(),
            directory_id: None,
        })
    }

    fn delete(&mut self, item: &RemoteItem) -> Result<()> {
        self.operations.push(PlannedOperation::Delete {
            id: item.id(),
            name: item.name().to_string(),
            directory: item.is_directory(),
        });
        Ok(())
    }
}
