//! Harness configuration.
//!
//! The original tool hardcoded every filename and directory as a global
//! constant. They live here instead, as an explicit config passed into each
//! operation, so tests can substitute paths without touching process-wide
//! state.

use std::path::{Path, PathBuf};

/// Default fixed test filename expected at the root of the working directory.
pub const DEFAULT_TEST_FILE: &str = "MainTest.java";

/// Canonical class name every candidate's public class is renamed to.
pub const CANONICAL_CLASS: &str = "Main";

/// Configuration for a harness run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Working directory to discover candidates in and scaffold under.
    pub root: PathBuf,
    /// Filename of the fixed test file, expected at `root`.
    pub test_file: String,
    /// Identifier candidates' public classes are renamed to.
    pub canonical_class: String,
    /// Extension (without dot) identifying candidate source files.
    pub source_ext: String,
    /// Main-sources tree inside the scaffold, relative to `root`.
    pub src_main: PathBuf,
    /// Test-sources tree inside the scaffold, relative to `root`.
    pub src_test: PathBuf,
    /// Build configuration filename generated at `root`.
    pub build_file: String,
    /// Explicit path to the `gradle` executable. When unset the runner
    /// searches PATH.
    pub gradle_path: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            test_file: DEFAULT_TEST_FILE.to_string(),
            canonical_class: CANONICAL_CLASS.to_string(),
            source_ext: "java".to_string(),
            src_main: PathBuf::from("src/main/java"),
            src_test: PathBuf::from("src/test/java"),
            build_file: "build.gradle".to_string(),
            gradle_path: None,
        }
    }
}

impl HarnessConfig {
    /// Creates a config rooted at the given working directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Sets the fixed test filename.
    pub fn test_file(mut self, name: impl Into<String>) -> Self {
        self.test_file = name.into();
        self
    }

    /// Sets the Gradle executable path.
    pub fn gradle_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.gradle_path = Some(path.into());
        self
    }

    /// Canonical main source filename, e.g. `Main.java`.
    pub fn main_file_name(&self) -> String {
        format!("{}.{}", self.canonical_class, self.source_ext)
    }

    /// Path of the canonical main-source slot in the scaffold.
    pub fn main_file_path(&self) -> PathBuf {
        self.root.join(&self.src_main).join(self.main_file_name())
    }

    /// Path of the test file's slot inside the scaffold.
    pub fn test_dest_path(&self) -> PathBuf {
        self.root.join(&self.src_test).join(&self.test_file)
    }

    /// Path of the fixed test file at the working-directory root.
    pub fn test_source_path(&self) -> PathBuf {
        self.root.join(&self.test_file)
    }

    /// Path of the generated build configuration file.
    pub fn build_file_path(&self) -> PathBuf {
        self.root.join(&self.build_file)
    }

    /// Filename of the generated wrapper script for the current platform.
    pub fn wrapper_file_name(&self) -> &'static str {
        if cfg!(windows) {
            "gradlew.bat"
        } else {
            "gradlew"
        }
    }

    /// Working directory as a path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
