//! Copy translated files from extracted packages

use std::path::Path;

use colored::Colorize;

use l10n_config::SyncConfiguration;
use l10n_sync::TranslationsCopier;

use crate::error::Result;

/// Run the copy-translations command
pub fn run_copy_translations(
    project_dir: &Path,
    configuration: &SyncConfiguration,
    packages_dir: &Path,
    output_dir: Option<&Path>,
) -> Result<()> {
    let base_output_dir = output_dir.unwrap_or(project_dir);
    let copier = TranslationsCopier::new(packages_dir);

    for project in &configuration.projects {
        copier.copy(project, base_output_dir)?;
        println!(
            "{} copied translations for project {}",
            "OK".green().bold(),
            project.id
        );
    }
    Ok(())
}
