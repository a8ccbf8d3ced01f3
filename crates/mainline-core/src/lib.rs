//! mainline core
//!
//! This crate implements the batch test harness behind the `mainline` CLI:
//! it discovers candidate single-class Java files, renames each file's
//! public class to a canonical `Main`, assembles a minimal Gradle project
//! around a fixed JUnit test file, runs the tests with JaCoCo coverage
//! instrumentation, and tears the project tree down between candidates.
//!
//! # Pipeline
//!
//! ```text
//! DISCOVERED -> RENAMED -> SCAFFOLDED -> TESTED (pass|fail) -> CLEANED
//! ```
//!
//! The pipeline is strictly sequential. The only shared state between
//! candidates is the canonical scaffold path, and [`scaffold::Scaffold`]
//! guarantees it is torn down before the next candidate is copied in, on
//! every exit path including a failed build.
//!
//! A failing candidate (non-zero Gradle exit) never aborts the batch; it is
//! recorded and the loop continues. Failing to launch Gradle at all does
//! abort the batch.
//!
//! # Example
//!
//! ```ignore
//! use mainline_core::config::HarnessConfig;
//! use mainline_core::{discover, harness, rename, scaffold};
//!
//! let config = HarnessConfig::with_root(".");
//! for candidate in discover::candidate_files(&config) {
//!     rename::rename_class(&config, &candidate)?;
//!     let record = harness::process_candidate(&config, &candidate)?;
//!     println!("{}: {:?}", record.candidate, record.status);
//! }
//! scaffold::cleanup(&config);
//! ```

pub mod config;
pub mod discover;
pub mod error;
pub mod gradle;
pub mod harness;
pub mod rename;
pub mod scaffold;

pub use config::HarnessConfig;
pub use error::{HarnessError, HarnessResult};
pub use gradle::TestRun;
pub use harness::{CandidateRecord, CandidateStatus};
pub use rename::RenameOutcome;
