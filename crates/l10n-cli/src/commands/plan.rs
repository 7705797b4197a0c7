//! Preview the remote operations an upload would issue

use std::fs;
use std::path::Path;

use colored::Colorize;

use l10n_config::SyncConfiguration;
use l10n_sync::{PlanningPort, Reconciler, RemoteSnapshot, RemoteTree, build_local_tree};

use crate::error::{CliError, Result};

/// Run the plan command
///
/// Diffs the local tree against a remote snapshot and prints the
/// create/update/delete operations in the order a reconciliation pass would
/// issue them. Nothing is applied.
pub fn run_plan(
    project_dir: &Path,
    configuration: &SyncConfiguration,
    snapshot_path: &Path,
) -> Result<()> {
    if configuration.projects.len() != 1 {
        return Err(CliError::user(
            "plan works on a single project; select one with --project",
        ));
    }
    let project = &configuration.projects[0];

    let snapshot = load_snapshot(snapshot_path)?;
    let mut remote = RemoteTree::from_snapshot(snapshot)?;
    let local = build_local_tree(project_dir, project)?;

    let mut port = PlanningPort::new();
    Reconciler::new(&mut port, &mut remote).run(project, &local)?;

    let operations = port.into_operations();
    if operations.is_empty() {
        println!(
            "{} project {} is up to date",
            "OK".green().bold(),
            project.id
        );
        return Ok(());
    }

    println!(
        "{} project {}: {} operation(s)",
        "=>".blue().bold(),
        project.id,
        operations.len()
    );
    for operation in &operations {
        println!("   {} {}", "-".cyan(), operation);
    }
    Ok(())
}

pub(crate) fn load_snapshot(path: &Path) -> Result<RemoteSnapshot> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| CliError::Snapshot {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
