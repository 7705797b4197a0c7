//! Reconciliation of local sources against the remote service

use tracing::debug;

use l10n_config::ProjectConfig;
use l10n_vfs::{DiffEntry, NodeId, diff_at};

use crate::local::LocalTree;
use crate::port::RemotePort;
use crate::remote::{RemoteItem, RemoteTree};
use crate::{Error, Result};

/// Applies the local state of one project to the remote service.
///
/// Each source root is diffed and applied in traversal order, parents before
/// children. Removals are buffered across all source roots and flushed last
/// in reverse discovery order, so contents are deleted before their
/// containing directory and a path that moved between source roots is
/// created at its new location before the old one is removed. The buffered
/// order is only correct because the diff traversal itself is
/// parent-before-child.
///
/// The remote tree is updated in place as items are created, so later
/// lookups (a sibling needing a freshly created parent id) see up-to-date
/// state. A failing port call aborts the pass; already-applied operations
/// are not rolled back.
pub struct Reconciler<'a, P: RemotePort> {
    port: &'a mut P,
    remote: &'a mut RemoteTree,
    pending_removals: Vec<RemoteItem>,
}

impl<'a, P: RemotePort> Reconciler<'a, P> {
    pub fn new(port: &'a mut P, remote: &'a mut RemoteTree) -> Self {
        Self {
            port,
            remote,
            pending_removals: Vec::new(),
        }
    }

    /// Reconcile every source root of `project`, then flush removals.
    ///
    /// Source roots with no local files are skipped.
    pub fn run(mut self, project: &ProjectConfig, local: &LocalTree) -> Result<()> {
        for source in project.sources() {
            let root_dir = &source.remote_path.dir;
            if local.get(root_dir).is_none() {
                continue;
            }
            self.apply_source(local, root_dir)?;
        }
        self.flush_removals()
    }

    fn apply_source(&mut self, local: &LocalTree, root_dir: &str) -> Result<()> {
        let diff = diff_at(local, self.remote.tree(), root_dir)?;

        let mut nodes = Vec::new();
        diff.traverse(|_, node| nodes.push(node));
        for node in nodes {
            let Some(entry) = diff.payload(node) else {
                continue;
            };
            match *entry {
                DiffEntry::Added { right } => self.add(local, right)?,
                DiffEntry::Same { right, left } => self.update(local, right, left)?,
                DiffEntry::Removed { left } => self.mark_removed(left),
            }
        }
        Ok(())
    }

    fn add(&mut self, local: &LocalTree, node: NodeId) -> Result<()> {
        if local.has_payload(node) {
            self.upload_file(local, node)
        } else {
            self.create_directories(local, node)
        }
    }

    fn upload_file(&mut self, local: &LocalTree, node: NodeId) -> Result<()> {
        let Some(entry) = local.payload(node) else {
            return Ok(());
        };
        let parent_path = match local.parent(node) {
            Some(parent) => local.path(parent),
            None => return Ok(()),
        };
        let parent_id = self.remote.id_at(parent_path)?;

        let record = self.port.create_file(parent_id, entry)?;
        debug!(path = local.path(node), id = record.id, "created remote file");
        self.remote.add_file(record)?;
        Ok(())
    }

    fn create_directories(&mut self, local: &LocalTree, node: NodeId) -> Result<()> {
        // Root-down walk: every missing ancestor is created before its child.
        let mut chain = Vec::new();
        local.walk_ancestors(node, |path, id| chain.push((path.to_string(), id)));
        for (path, id) in chain {
            if self.remote.tree().get(&path).is_some() {
                continue;
            }
            let parent_id = match local.parent(id) {
                Some(parent) if !local.is_root(parent) => {
                    self.remote.id_at(local.path(parent))?
                }
                _ => None,
            };
            let record = self.port.create_directory(parent_id, local.name(id))?;
            debug!(path = %path, id = record.id, "created remote directory");
            self.remote.add_directory(record)?;
        }
        Ok(())
    }

    fn update(&mut self, local: &LocalTree, right: NodeId, left: NodeId) -> Result<()> {
        let Some(entry) = local.payload(right) else {
            // Directory markers on both sides need no call.
            return Ok(());
        };
        let path = local.path(right);
        let id = match self.remote.tree().payload(left) {
            Some(item) => item.id(),
            None => {
                return Err(Error::MissingRemoteRecord {
                    path: path.to_string(),
                });
            }
        };

        let record = self.port.update_file(id, entry)?;
        debug!(path = path, id = record.id, "updated remote file");
        self.remote.refresh(path, RemoteItem::File(record))?;
        Ok(())
    }

    fn mark_removed(&mut self, node: NodeId) {
        match self.remote.tree().payload(node) {
            Some(item) => self.pending_removals.push(item.clone()),
            None => debug!(
                path = self.remote.tree().path(node),
                "skipping removal of payload-less marker"
            ),
        }
    }

    fn flush_removals(&mut self) -> Result<()> {
        // Reverse discovery order: contents before their container.
        for item in self.pending_removals.drain(..).rev() {
            debug!(
                id = item.id(),
                directory = item.is_directory(),
                "deleting remote item"
            );
            self.port.delete(&item)?;
        }
        Ok(())
    }
}
