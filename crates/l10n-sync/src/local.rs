//! Local source enumeration and tree construction

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use tracing::info;

use l10n_config::{FileSet, PathPair, ProjectConfig, SourceConfig, TokenReplacer};
use l10n_vfs::PathTree;

use crate::{Error, Result};

/// Import options passed through to the remote service unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Translatable elements of an XML file.
    pub translatable_elements: Vec<String>,
}

/// Export options passed through to the remote service unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Path pattern the translated file gets inside a translation package.
    pub export_pattern: String,
}

/// A local source file resolved to its remote location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEntry {
    /// Filename the file gets remotely (last segment of its remote path).
    pub name: String,
    /// Location of the file on disk.
    pub path: PathBuf,
    /// Remote file type hint.
    pub file_type: Option<String>,
    pub import_options: Option<ImportOptions>,
    pub export_options: ExportOptions,
}

/// The local half of a synchronization pass.
pub type LocalTree = PathTree<LocalEntry>;

/// Build the local tree for one project by enumerating its sources.
///
/// Empty files are skipped with a log line. Two files resolving to the same
/// remote path is a fatal configuration error, reported with both disk
/// paths.
pub fn build_local_tree(project_dir: &Path, project: &ProjectConfig) -> Result<LocalTree> {
    let mut tree = PathTree::new();
    let base_dirname = project_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let template = PathTemplate::new(base_dirname);

    for source in project.sources() {
        let dir = resolve_directory(project_dir, &source.dir)?;
        for file_set in &source.includes {
            for file in enumerate_files(&dir, &file_set.pattern)? {
                let metadata = fs::metadata(&file).map_err(|e| Error::io(&file, e))?;
                if metadata.len() == 0 {
                    info!(
                        project = project.id,
                        path = %file.display(),
                        "ignoring empty file"
                    );
                    continue;
                }
                add_file(&mut tree, &template, source, file_set, &dir, &file)?;
            }
        }
    }
    Ok(tree)
}

fn add_file(
    tree: &mut LocalTree,
    template: &PathTemplate,
    source: &SourceConfig,
    file_set: &FileSet,
    base_dir: &Path,
    file: &Path,
) -> Result<()> {
    let remote_path = template.build(
        &source.remote_path,
        file_set.remote_filename.as_deref(),
        base_dir,
        file,
    );
    let entry = local_entry(template, source, file_set, base_dir, file, &remote_path);

    if tree.insert_with(&remote_path, entry)?.is_none() {
        let existing = tree
            .get(&remote_path)
            .and_then(|node| tree.payload(node))
            .map(|entry| entry.path.clone())
            .unwrap_or_default();
        return Err(Error::PathClash {
            path: remote_path,
            existing,
            incoming: file.to_path_buf(),
        });
    }
    Ok(())
}

fn local_entry(
    template: &PathTemplate,
    source: &SourceConfig,
    file_set: &FileSet,
    base_dir: &Path,
    file: &Path,
    remote_path: &str,
) -> LocalEntry {
    let name = remote_path
        .rsplit('/')
        .next()
        .unwrap_or(remote_path)
        .to_string();
    let import_options = file_set
        .translatable_elements
        .as_ref()
        .filter(|elements| !elements.is_empty())
        .map(|elements| ImportOptions {
            translatable_elements: elements.clone(),
        });
    let export_pattern = template.build(
        &source.export_pattern,
        file_set.export_filename.as_deref(),
        base_dir,
        file,
    );
    LocalEntry {
        name,
        path: file.to_path_buf(),
        file_type: file_set.file_type.clone(),
        import_options,
        export_options: ExportOptions { export_pattern },
    }
}

fn resolve_directory(base_dir: &Path, dir: &str) -> Result<PathBuf> {
    let resolved = base_dir.join(dir);
    if !resolved.exists() {
        return Err(Error::MissingSourceDir {
            path: resolved,
            base: base_dir.to_path_buf(),
            dir: dir.to_string(),
        });
    }
    if !resolved.is_dir() {
        return Err(Error::NotADirectory { path: resolved });
    }
    Ok(resolved)
}

/// Enumerate the files under `dir` matching a gitignore-style glob.
fn enumerate_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let mut overrides = OverrideBuilder::new(dir);
    overrides
        .add(pattern)
        .map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
    let overrides = overrides.build().map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    let walk = WalkBuilder::new(dir)
        .overrides(overrides)
        .standard_filters(false)
        .build();
    for entry in walk {
        let entry = entry.map_err(|e| Error::Enumerate {
            dir: dir.to_path_buf(),
            source: e,
        })?;
        if entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Expands the per-file tokens of remote paths and export patterns.
///
/// Tokens: `%base_dirname%`, `%file_pathname%` (path relative to the source
/// dir), `%file_name%` (stem), `%file_extension%` (includes the dot).
pub struct PathTemplate {
    base_dirname: String,
}

impl PathTemplate {
    pub fn new(base_dirname: impl Into<String>) -> Self {
        Self {
            base_dirname: base_dirname.into(),
        }
    }

    /// Build the path for `file` from a dir/filename pair, with the pair's
    /// filename overridden by `custom_filename` when given.
    pub fn build(
        &self,
        pair: &PathPair,
        custom_filename: Option<&str>,
        base_dir: &Path,
        file: &Path,
    ) -> String {
        let filename = custom_filename.unwrap_or(&pair.filename);
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let pathname = file
            .strip_prefix(base_dir)
            .map(|relative| relative.to_string_lossy().replace('\\', "/"))
            .unwrap_or_else(|_| file.to_string_lossy().replace('\\', "/"));

        let replacer = TokenReplacer::new([
            ("%base_dirname%".to_string(), self.base_dirname.clone()),
            ("%file_pathname%".to_string(), pathname),
            ("%file_name%".to_string(), stem(&file_name).to_string()),
            (
                "%file_extension%".to_string(),
                extension(&file_name).to_string(),
            ),
        ]);
        replacer.replace(&format!("{}/{}", pair.dir, filename))
    }
}

fn stem(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(index) => &filename[..index],
        None => filename,
    }
}

fn extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(index) => &filename[index..],
        None => "",
    }
}
