//! Clean command implementation
//!
//! Standalone best-effort teardown of generated scaffold artifacts, for
//! recovering a working directory after an interrupted run.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use mainline_core::config::HarnessConfig;
use mainline_core::scaffold;

/// Run the cleanup sweep.
///
/// # Arguments
/// * `dir` - Working directory (defaults to the current directory)
///
/// # Returns
/// Exit code: always 0; missing paths are not errors
pub fn run(dir: Option<&str>) -> Result<ExitCode> {
    let config = HarnessConfig::with_root(dir.unwrap_or("."));

    println!("{}", "Cleaning up build and src directories...".blue());
    scaffold::cleanup(&config);

    Ok(ExitCode::SUCCESS)
}
