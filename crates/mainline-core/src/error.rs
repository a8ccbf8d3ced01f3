//! Error types for the test harness.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Errors that can occur while discovering, renaming, scaffolding, or
/// running candidates.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Gradle executable not found.
    #[error("Gradle executable not found. Ensure Gradle is installed and in PATH, or set the gradle path on the harness config")]
    GradleNotFound,

    /// An explicitly configured Gradle path does not exist.
    #[error("Configured Gradle executable not found: {path}")]
    GradleOverrideMissing { path: PathBuf },

    /// Failed to spawn the Gradle process.
    #[error("Failed to spawn Gradle process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// The fixed test file is missing from the working directory.
    #[error("Test file not found: {path}")]
    TestFileMissing { path: PathBuf },

    /// Failed to read a candidate source file.
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a candidate or generated file.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a file into the scaffold.
    #[error("Failed to copy {from} to {to}: {source}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Creates a read error carrying the offending path.
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a write error carrying the offending path.
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a copy error carrying both endpoints.
    pub fn copy_failed(
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CopyFailed {
            from: from.into(),
            to: to.into(),
            source,
        }
    }
}
