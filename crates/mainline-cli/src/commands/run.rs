//! Run command implementation
//!
//! The full batch: discover candidates, rename their public classes to
//! `Main`, then scaffold, test, and tear down each one in turn. A failing
//! candidate is logged and counted; it never stops the batch.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use mainline_core::config::HarnessConfig;
use mainline_core::harness::{process_candidate, CandidateRecord, CandidateStatus};
use mainline_core::rename::{rename_class, RenameOutcome};
use mainline_core::{discover, scaffold};

/// Run the batch harness.
///
/// # Arguments
/// * `dir` - Working directory (defaults to the current directory)
/// * `test_file` - Fixed test filename expected at the working-directory root
/// * `gradle` - Explicit path to the Gradle executable (defaults to PATH lookup)
/// * `report` - Optional path for a JSON pass/fail report
///
/// # Returns
/// Exit code: 0 if every tested candidate passed, 1 otherwise
pub fn run(
    dir: Option<&str>,
    test_file: Option<&str>,
    gradle: Option<&str>,
    report: Option<&str>,
) -> Result<ExitCode> {
    let mut config = HarnessConfig::with_root(dir.unwrap_or("."));
    if let Some(name) = test_file {
        config.test_file = name.to_string();
    }
    if let Some(path) = gradle {
        config = config.gradle_path(path);
    }

    println!("{}", "Starting Java code testing...".green());

    // Rename pass over everything discovered, before any test runs.
    let discovered = discover::candidate_files(&config);
    let mut candidates = Vec::new();
    for path in discovered {
        match rename_class(&config, &path)? {
            RenameOutcome::Renamed { original } => {
                println!("Renaming class {} in {}", original, path.display());
                candidates.push(path);
            }
            RenameOutcome::NoPublicClass => {
                println!("Could not find public class in {}", path.display());
            }
        }
    }

    if candidates.is_empty() {
        println!("No candidate files found.");
        scaffold::cleanup(&config);
        return Ok(ExitCode::SUCCESS);
    }

    let mut records: Vec<CandidateRecord> = Vec::new();
    let mut passed = 0;
    let mut failed = 0;

    for (i, candidate) in candidates.iter().enumerate() {
        let progress = format!("[{}/{}]", i + 1, candidates.len()).cyan().bold();
        println!(
            "\n{} {} {}",
            progress,
            "Processing file:".green(),
            candidate.display()
        );

        let record = process_candidate(&config, candidate)?;
        match record.status {
            CandidateStatus::Passed => {
                println!("  {}", "✓ PASS".green().bold());
                passed += 1;
            }
            CandidateStatus::Failed => {
                println!(
                    "{}",
                    format!("Error running tests for file: {}", candidate.display()).red()
                );
                println!(
                    "  {} (exit code: {})",
                    "✗ FAIL".red().bold(),
                    record.exit_code.unwrap_or(-1)
                );
                failed += 1;
            }
        }
        records.push(record);
    }

    println!("\n{}", "Cleaning up generated files...".blue());
    scaffold::cleanup(&config);

    println!("\n{}", "=".repeat(40));
    println!("{}", "All tests completed.".green());
    println!("  Total:  {}", records.len());
    println!(
        "  Passed: {}",
        if failed == 0 {
            passed.to_string().green()
        } else {
            passed.to_string().normal()
        }
    );
    println!(
        "  Failed: {}",
        if failed > 0 {
            failed.to_string().red()
        } else {
            failed.to_string().normal()
        }
    );

    if let Some(report_path) = report {
        write_report(report_path, &records, passed, failed)?;
        println!("Report: {}", report_path);
    }

    if failed > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn write_report(
    path: &str,
    records: &[CandidateRecord],
    passed: usize,
    failed: usize,
) -> Result<()> {
    let report = serde_json::json!({
        "total": records.len(),
        "passed": passed,
        "failed": failed,
        "results": records,
    });
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write report: {}", path))?;
    Ok(())
}
