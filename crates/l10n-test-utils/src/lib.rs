//! Shared test fixtures for the localization-manager workspace.
//!
//! This crate provides a temporary project directory builder to eliminate
//! fixture duplication across crate test suites. It is a dev-dependency
//! only, never published.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary project directory with helpers for test setup.
///
/// # Example
///
/// ```rust,no_run
/// use l10n_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_file("src/Messages.properties", "key=value");
/// project.write_config("projects:\n  - id: 1\n");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestProject::new: failed to create temp dir"),
        }
    }

    /// Root path of the project directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("TestProject::write_file: failed to create parents");
        }
        fs::write(&path, content).expect("TestProject::write_file: failed to write file");
        path
    }

    /// Create a directory relative to the root.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).expect("TestProject::create_dir: failed to create directory");
        path
    }

    /// Write the default-named configuration file (`l10n-sync.yml`).
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        self.write_file("l10n-sync.yml", yaml)
    }
}
