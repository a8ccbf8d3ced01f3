//! Candidate file discovery.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::HarnessConfig;

/// Path-substring markers for build output and tool caches. Any candidate
/// whose directory portion contains one of these is skipped.
const EXCLUDED_DIR_MARKERS: &[&str] = &["build", ".gradle"];

/// Collects candidate source files under the config root.
///
/// Matches files by the configured extension, excluding the fixed test
/// filename and anything under a build-output or Gradle-cache directory.
/// The exclusion is a substring match on the parent directory's path, so a
/// source directory literally named e.g. `buildings/` is skipped too.
/// Ordering follows filesystem traversal order and is not guaranteed.
pub fn candidate_files(config: &HarnessConfig) -> Vec<PathBuf> {
    WalkDir::new(config.root())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == config.source_ext)
                .unwrap_or(false)
        })
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(|name| name != config.test_file)
                .unwrap_or(true)
        })
        .filter(|e| {
            // Markers are matched against the root-relative directory so an
            // absolute root that itself contains "build" excludes nothing.
            let dir = e
                .path()
                .strip_prefix(config.root())
                .unwrap_or(e.path())
                .parent()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default();
            !EXCLUDED_DIR_MARKERS.iter().any(|m| dir.contains(m))
        })
        .map(|e| e.path().to_path_buf())
        .collect()
}
