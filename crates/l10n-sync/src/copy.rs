//! Copying translated files from extracted packages into the project tree

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use l10n_config::ProjectConfig;

use crate::{Error, Result};

/// Copies translated files from extracted translation packages.
///
/// Packages are expected as one directory per project id under the packages
/// directory; downloading and extracting the archives happens upstream.
pub struct TranslationsCopier {
    packages_dir: PathBuf,
}

impl TranslationsCopier {
    pub fn new(packages_dir: impl Into<PathBuf>) -> Self {
        Self {
            packages_dir: packages_dir.into(),
        }
    }

    /// Copy every translated file of `project` into its output directories.
    ///
    /// For each source, the files under the source's `export_pattern` dir
    /// inside the package are copied into `output_dir` (falling back to the
    /// source dir), relative to `base_output_dir`. A missing package is a
    /// warning, not an error.
    pub fn copy(&self, project: &ProjectConfig, base_output_dir: &Path) -> Result<()> {
        if project.sources().is_empty() {
            info!(
                project = project.id,
                "no files to copy, no sources defined in the configuration"
            );
            return Ok(());
        }

        let package_dir = self.packages_dir.join(project.id.to_string());
        if !package_dir.is_dir() {
            warn!(
                project = project.id,
                path = %package_dir.display(),
                "no translation package found"
            );
            return Ok(());
        }

        for source in project.sources() {
            let output_dir = base_output_dir.join(source.effective_output_dir());
            copy_files(&package_dir, &source.export_pattern.dir, &output_dir)?;
        }
        Ok(())
    }
}

fn copy_files(package_dir: &Path, export_dir: &str, output_dir: &Path) -> Result<()> {
    // Export dirs always start with a separator; they address paths inside
    // the package.
    let subtree = package_dir.join(export_dir.trim_start_matches('/'));
    if !subtree.is_dir() {
        return Ok(());
    }

    for entry in WalkDir::new(&subtree) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&subtree) else {
            continue;
        };
        let target = output_dir.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::copy(entry.path(), &target).map_err(|e| Error::io(entry.path(), e))?;
        debug!(
            from = %entry.path().display(),
            to = %target.display(),
            "copied translated file"
        );
    }
    Ok(())
}
