//! Per-candidate test pipeline.
//!
//! One candidate moves through scaffold → test invocation → teardown. The
//! scaffold's teardown runs on every exit path, so the canonical source slot
//! is always empty again before the next candidate is copied in.

use std::path::Path;

use serde::Serialize;

use crate::config::HarnessConfig;
use crate::error::HarnessResult;
use crate::gradle::{GradleRunner, TestRun};
use crate::scaffold::Scaffold;

/// Outcome of testing one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    /// The candidate compiled and its tests passed.
    Passed,
    /// The candidate's tests failed or it did not build.
    Failed,
}

/// Per-candidate record for the batch report.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateRecord {
    /// Path of the candidate as discovered.
    pub candidate: String,
    /// Final status after the test invocation.
    pub status: CandidateStatus,
    /// Exit code of the failing Gradle invocation, when status is failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

/// Scaffolds, tests, and tears down a single renamed candidate.
///
/// A non-zero Gradle exit is reported as [`CandidateStatus::Failed`] and
/// does not abort the batch; scaffold/spawn errors propagate. Teardown runs
/// regardless of outcome.
pub fn process_candidate(
    config: &HarnessConfig,
    candidate: &Path,
) -> HarnessResult<CandidateRecord> {
    let _scaffold = Scaffold::build(config, candidate)?;

    let run = GradleRunner::new(config).run()?;

    let (status, exit_code) = match run {
        TestRun::Passed => (CandidateStatus::Passed, None),
        TestRun::Failed { exit_code } => (CandidateStatus::Failed, Some(exit_code)),
    };

    Ok(CandidateRecord {
        candidate: candidate.to_string_lossy().to_string(),
        status,
        exit_code,
    })
}
