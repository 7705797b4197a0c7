//! List the local source files of each project

use std::path::Path;

use colored::Colorize;

use l10n_config::SyncConfiguration;
use l10n_sync::build_local_tree;
use l10n_vfs::render;

use crate::error::Result;

/// Run the list-sources command
///
/// Builds each project's local tree and renders it in the same order the
/// reconciler would process it.
pub fn run_list_sources(project_dir: &Path, configuration: &SyncConfiguration) -> Result<()> {
    for project in &configuration.projects {
        println!("{} project {}", "=>".blue().bold(), project.id);

        let tree = build_local_tree(project_dir, project)?;
        if !tree.has_children(tree.root()) {
            println!("   {}", "no source files".dimmed());
            continue;
        }

        let mut files = 0;
        tree.traverse(|_, node| {
            if tree.has_payload(node) {
                files += 1;
            }
        });

        print!("{}", render(&tree, tree.root(), |_| None));
        println!("   {}", format!("{files} file(s)").dimmed());
    }
    Ok(())
}
