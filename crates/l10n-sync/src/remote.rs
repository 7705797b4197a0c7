//! Remote tree construction from flat directory/file records

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use l10n_vfs::PathTree;

use crate::{Error, Result};

/// Opaque identifier assigned by the remote service.
pub type RemoteId = u64;

/// A directory as reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    pub id: RemoteId,
    pub name: String,
    /// Parent directory; `None` attaches directly under the root.
    pub parent_id: Option<RemoteId>,
}

/// A file as reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: RemoteId,
    pub name: String,
    /// Containing directory; `None` places the file directly under the root.
    pub directory_id: Option<RemoteId>,
}

/// Payload of a remote tree node: a directory or a file record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteItem {
    Directory(DirectoryRecord),
    File(FileRecord),
}

impl RemoteItem {
    pub fn id(&self) -> RemoteId {
        match self {
            Self::Directory(record) => record.id,
            Self::File(record) => record.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Directory(record) => &record.name,
            Self::File(record) => &record.name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}

/// Flat snapshot of a remote project's file tree.
///
/// This is the shape collaborators (and fixtures) hand over; the transport
/// that produces it is out of scope here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteSnapshot {
    #[serde(default)]
    pub directories: Vec<DirectoryRecord>,
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

/// The remote hierarchy, rebuilt from flat records.
///
/// Paths are derived by following parent links through the memoized
/// id→directory map, so records may arrive in any order. A record whose
/// parent id is not in the directory set aborts construction instead of
/// silently attaching to the root.
#[derive(Debug, Clone)]
pub struct RemoteTree {
    tree: PathTree<RemoteItem>,
    directories: HashMap<RemoteId, DirectoryRecord>,
}

impl RemoteTree {
    /// Build a tree from the given records.
    pub fn build(directories: Vec<DirectoryRecord>, files: Vec<FileRecord>) -> Result<Self> {
        let mut remote = Self {
            tree: PathTree::new(),
            directories: directories
                .iter()
                .map(|record| (record.id, record.clone()))
                .collect(),
        };
        for directory in directories {
            remote.add_directory(directory)?;
        }
        for file in files {
            remote.add_file(file)?;
        }
        Ok(remote)
    }

    /// Build a tree from a flat snapshot.
    pub fn from_snapshot(snapshot: RemoteSnapshot) -> Result<Self> {
        Self::build(snapshot.directories, snapshot.files)
    }

    /// Register a directory record, inserting its path into the tree.
    ///
    /// Also used during reconciliation to record directories just created
    /// remotely, so later lookups resolve their ids.
    pub fn add_directory(&mut self, record: DirectoryRecord) -> Result<()> {
        let path = self.item_path(&record.name, record.parent_id)?;
        let inserted = self
            .tree
            .insert_with(&path, RemoteItem::Directory(record.clone()))?;
        if inserted.is_some() {
            self.directories.insert(record.id, record);
        }
        Ok(())
    }

    /// Register a file record, inserting its path into the tree.
    pub fn add_file(&mut self, record: FileRecord) -> Result<()> {
        let path = self.item_path(&record.name, record.directory_id)?;
        self.tree.insert_with(&path, RemoteItem::File(record))?;
        Ok(())
    }

    /// Overwrite the record stored at `path` after a remote update.
    pub fn refresh(&mut self, path: &str, item: RemoteItem) -> Result<()> {
        let node = self.tree.get(path).ok_or_else(|| Error::MissingRemoteRecord {
            path: path.to_string(),
        })?;
        self.tree.replace_payload(node, item);
        Ok(())
    }

    /// The id recorded at `path`; `None` for the root or a payload-less
    /// marker.
    ///
    /// # Errors
    ///
    /// Fails when the path itself does not resolve; reconciliation creates
    /// parents before children, so an absent parent is an inconsistency.
    pub fn id_at(&self, path: &str) -> Result<Option<RemoteId>> {
        let node = self.tree.get(path).ok_or_else(|| Error::MissingRemoteRecord {
            path: path.to_string(),
        })?;
        Ok(self.tree.payload(node).map(RemoteItem::id))
    }

    /// The underlying path tree.
    pub fn tree(&self) -> &PathTree<RemoteItem> {
        &self.tree
    }

    fn item_path(&self, name: &str, mut parent_id: Option<RemoteId>) -> Result<String> {
        let mut segments = vec![name.to_string()];
        let mut seen = HashSet::new();
        while let Some(id) = parent_id {
            if !seen.insert(id) {
                return Err(Error::ParentCycle { id });
            }
            let parent = self
                .directories
                .get(&id)
                .ok_or_else(|| Error::UnknownParent {
                    name: name.to_string(),
                    parent: id,
                })?;
            segments.push(parent.name.clone());
            parent_id = parent.parent_id;
        }
        segments.reverse();
        Ok(format!("/{}", segments.join("/")))
    }
}
