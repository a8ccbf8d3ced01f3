//! Public-class rename pass.
//!
//! Rewrites a candidate's public class to the canonical name so the fixed
//! test file can reference every candidate uniformly. This is a whole-word
//! textual substitution, not a scope-aware rename: occurrences of the
//! identifier inside comments and string literals are rewritten too.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};

/// Outcome of a rename attempt on a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The public class was found and all whole-word occurrences rewritten.
    Renamed {
        /// The identifier the file declared before rewriting.
        original: String,
    },
    /// No `public class` declaration was found; the file was left untouched.
    NoPublicClass,
}

/// Renames the first-declared public class in `path` to the canonical name,
/// rewriting every whole-word occurrence of the identifier in place.
///
/// Returns [`RenameOutcome::NoPublicClass`] without modifying the file when
/// no declaration matches; the caller decides how to report the skip.
pub fn rename_class(config: &HarnessConfig, path: &Path) -> HarnessResult<RenameOutcome> {
    let content = fs::read_to_string(path).map_err(|e| HarnessError::read_failed(path, e))?;

    let decl_re = Regex::new(r"public class ([A-Za-z0-9_]+)").expect("valid regex");
    let original = match decl_re.captures(&content) {
        Some(caps) => caps[1].to_string(),
        None => return Ok(RenameOutcome::NoPublicClass),
    };

    let word_re =
        Regex::new(&format!(r"\b{}\b", regex::escape(&original))).expect("valid regex");
    let updated = word_re.replace_all(&content, config.canonical_class.as_str());

    fs::write(path, updated.as_bytes()).map_err(|e| HarnessError::write_failed(path, e))?;

    Ok(RenameOutcome::Renamed { original })
}
