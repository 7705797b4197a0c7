//! List the remote files of a snapshot

use std::path::Path;

use colored::Colorize;

use l10n_sync::{RemoteItem, RemoteTree};
use l10n_vfs::render;

use crate::error::Result;

use super::plan::load_snapshot;

/// Run the list-remote command
///
/// Rebuilds the remote tree from a snapshot and renders it with the record
/// ids, in the same order a reconciliation pass would visit it.
pub fn run_list_remote(snapshot_path: &Path) -> Result<()> {
    let remote = RemoteTree::from_snapshot(load_snapshot(snapshot_path)?)?;
    let tree = remote.tree();

    if !tree.has_children(tree.root()) {
        println!("{}", "no remote files".dimmed());
        return Ok(());
    }

    print!(
        "{}",
        render(tree, tree.root(), |node| {
            tree.payload(node).map(|item| match item {
                RemoteItem::Directory(record) => format!(" (directory #{})", record.id),
                RemoteItem::File(record) => format!(" (file #{})", record.id),
            })
        })
    );
    Ok(())
}
