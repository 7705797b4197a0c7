//! Configuration model for synchronization runs
//!
//! The configuration declares, per remote project, which local files to
//! upload, how they are addressed in the remote tree, and where translated
//! files land when copied back. Every string value goes through token
//! substitution before validation; nothing downstream ever sees an
//! unresolved configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::tokens::TokenReplacer;
use crate::{Error, Result};

/// Top-level configuration: the remote projects to synchronize.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfiguration {
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

impl SyncConfiguration {
    /// Load and resolve a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed, or when
    /// validation fails after token substitution.
    pub fn load(path: &Path, tokens: &TokenReplacer) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut configuration: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        configuration.resolve(tokens)?;
        Ok(configuration)
    }

    /// Parse and resolve a configuration from a YAML string.
    pub fn parse(content: &str, tokens: &TokenReplacer) -> Result<Self> {
        let mut configuration: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Invalid {
                message: format!("failed to parse the configuration: {e}"),
            })?;
        configuration.resolve(tokens)?;
        Ok(configuration)
    }

    fn resolve(&mut self, tokens: &TokenReplacer) -> Result<()> {
        if self.projects.is_empty() {
            return Err(Error::invalid(
                "no projects specified in the configuration file",
            ));
        }
        for project in &mut self.projects {
            project.resolve(tokens)?;
        }
        Ok(())
    }
}

/// A remote project and the local sources feeding it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Remote project identifier.
    pub id: u64,

    /// Sources are optional so translations can be copied without defining
    /// the whole upload configuration.
    pub sources: Option<Vec<SourceConfig>>,
}

impl ProjectConfig {
    fn resolve(&mut self, tokens: &TokenReplacer) -> Result<()> {
        if let Some(sources) = &mut self.sources {
            for source in sources {
                source.resolve(tokens)?;
            }
        }
        Ok(())
    }

    /// The configured sources, or an empty slice when none are defined.
    pub fn sources(&self) -> &[SourceConfig] {
        self.sources.as_deref().unwrap_or_default()
    }
}

/// One directory of source files to translate.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Directory the source files are read from, relative to the project
    /// root.
    pub dir: String,

    /// Directory translated files are copied to, when different from `dir`.
    pub output_dir: Option<String>,

    /// Where the files live in the remote tree.
    pub remote_path: PathPair,

    /// Where the files land inside a translation package.
    pub export_pattern: PathPair,

    /// File sets included from `dir`.
    #[serde(default)]
    pub includes: Vec<FileSet>,
}

impl SourceConfig {
    fn resolve(&mut self, tokens: &TokenReplacer) -> Result<()> {
        self.dir = tokens.replace(&self.dir);
        if self.dir.is_empty() {
            return Err(Error::invalid("the source dir must not be empty"));
        }

        if let Some(output_dir) = &mut self.output_dir {
            *output_dir = tokens.replace(output_dir);
        }

        self.remote_path.resolve("remote_path", tokens)?;
        self.export_pattern.resolve("export_pattern", tokens)?;

        if self.includes.is_empty() {
            return Err(Error::invalid("the source includes must not be empty"));
        }
        for file_set in &mut self.includes {
            file_set.resolve(tokens)?;
        }
        Ok(())
    }

    /// Directory translated files are written to.
    pub fn effective_output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(&self.dir)
    }
}

/// A path split into its base dir and the filename.
#[derive(Debug, Clone, Deserialize)]
pub struct PathPair {
    /// Base directory; always starts with `/` and never ends with one after
    /// resolution.
    pub dir: String,

    /// Filename, possibly containing per-file tokens expanded later.
    pub filename: String,
}

impl PathPair {
    /// Build an already-resolved pair, validating like configuration loading
    /// does.
    pub fn new(dir: impl Into<String>, filename: impl Into<String>) -> Result<Self> {
        let mut pair = Self {
            dir: dir.into(),
            filename: filename.into(),
        };
        pair.resolve("path pair", &TokenReplacer::default())?;
        Ok(pair)
    }

    fn resolve(&mut self, field: &str, tokens: &TokenReplacer) -> Result<()> {
        self.dir = normalize_dir(tokens.replace(&self.dir));
        if self.dir.is_empty() {
            return Err(Error::invalid(format!("the {field} dir must not be empty")));
        }
        if !self.dir.starts_with('/') {
            return Err(Error::invalid(format!(
                "the {field} dir {} must start with /",
                self.dir
            )));
        }

        self.filename = tokens.replace(&self.filename);
        if self.filename.is_empty() {
            return Err(Error::invalid(format!(
                "the {field} filename must not be empty"
            )));
        }
        Ok(())
    }
}

fn normalize_dir(value: String) -> String {
    if value == "/" {
        return value;
    }
    match value.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => value,
    }
}

/// A glob-selected set of files inside a source directory.
#[derive(Debug, Clone, Deserialize)]
pub struct FileSet {
    /// Glob pattern selecting files under the source dir.
    pub pattern: String,

    /// Remote file type hint; the remote default applies when absent.
    #[serde(rename = "type")]
    pub file_type: Option<String>,

    /// Overrides the source's `remote_path` filename for this set.
    pub remote_filename: Option<String>,

    /// Overrides the source's `export_pattern` filename for this set.
    pub export_filename: Option<String>,

    /// Translatable elements of an XML file, passed through to the remote.
    pub translatable_elements: Option<Vec<String>>,
}

impl FileSet {
    fn resolve(&mut self, tokens: &TokenReplacer) -> Result<()> {
        self.pattern = tokens.replace(&self.pattern);
        if self.pattern.is_empty() {
            return Err(Error::invalid("the include pattern must not be empty"));
        }

        if let Some(file_type) = &mut self.file_type {
            *file_type = tokens.replace(file_type);
        }
        if let Some(remote_filename) = &mut self.remote_filename {
            *remote_filename = tokens.replace(remote_filename);
        }
        if let Some(export_filename) = &mut self.export_filename {
            *export_filename = tokens.replace(export_filename);
        }
        if let Some(elements) = &mut self.translatable_elements {
            for element in elements {
                *element = tokens.replace(element);
            }
        }
        Ok(())
    }
}
