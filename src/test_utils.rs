//! Test utilities for building temporary project layouts.
//!
//! This module is only compiled with the `test-utils` feature.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::layout::{DEFAULT_NAMESPACE, Language, SourceLayout};

/// A temporary project root.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Source directory of `package` for `language` under the default namespace.
    pub fn package_dir(&self, language: &str, package: &str) -> PathBuf {
        SourceLayout::new(self.dir.path(), DEFAULT_NAMESPACE)
            .source_dir(&Language::new(language), package)
    }

    /// Create an (empty) package directory and return its path.
    pub fn add_package(&self, language: &str, package: &str) -> PathBuf {
        let dir = self.package_dir(language, package);
        fs::create_dir_all(&dir).expect("Failed to create package dir");
        dir
    }

    /// Add a file inside a package directory, creating the directory as needed.
    pub fn add_source(&self, language: &str, package: &str, name: &str) -> PathBuf {
        let path = self.add_package(language, package).join(name);
        fs::write(&path, "").expect("Failed to write file");
        path
    }

    /// Add a file at a path relative to the root.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
