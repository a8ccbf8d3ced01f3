//! Gradle subprocess invocation.
//!
//! Two invocations per candidate: `gradle wrapper` to generate the wrapper,
//! then the wrapper's `test jacocoTestReport` task, which compiles, runs the
//! tests, and produces the coverage report. Output is not captured; Gradle
//! streams directly to the console. No timeout is enforced here.

use std::path::PathBuf;
use std::process::Command;

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};

/// Result of driving Gradle for one candidate.
///
/// A non-zero exit from either invocation is a recoverable outcome, not an
/// error: the candidate's tests failed or did not build, and the batch moves
/// on. Failing to launch Gradle at all is a [`HarnessError`] and aborts the
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestRun {
    /// Both invocations exited zero.
    Passed,
    /// An invocation exited non-zero.
    Failed {
        /// Exit code of the failing invocation (-1 when killed by a signal).
        exit_code: i32,
    },
}

/// Drives the Gradle invocations for the currently scaffolded candidate.
pub struct GradleRunner {
    config: HarnessConfig,
}

impl GradleRunner {
    /// Creates a runner for the given config.
    pub fn new(config: &HarnessConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Finds the Gradle executable: config override first, then PATH.
    ///
    /// An explicit override that does not exist is an error, not a fallback;
    /// silently searching PATH instead could run a different Gradle than the
    /// one the caller pinned. The override is canonicalized so it stays
    /// valid after the child's working directory changes; PATH hits are
    /// already absolute.
    fn find_gradle(&self) -> HarnessResult<PathBuf> {
        if let Some(ref path) = self.config.gradle_path {
            if path.exists() {
                return Ok(path.canonicalize()?);
            }
            return Err(HarnessError::GradleOverrideMissing { path: path.clone() });
        }

        let gradle_names = if cfg!(windows) {
            vec!["gradle.bat", "gradle"]
        } else {
            vec!["gradle"]
        };

        for name in gradle_names {
            if let Ok(path) = which::which(name) {
                return Ok(path);
            }
        }

        Err(HarnessError::GradleNotFound)
    }

    /// Generates the wrapper, then runs `test jacocoTestReport` through it.
    ///
    /// Stops at the first non-zero exit and reports it as [`TestRun::Failed`].
    pub fn run(&self) -> HarnessResult<TestRun> {
        let gradle = self.find_gradle()?;

        // The invocations change the child's working directory, which is
        // what a relative program path would resolve against. Canonicalize
        // the root so the wrapper path stays valid when the configured root
        // is itself relative.
        let root = self.config.root().canonicalize()?;

        let wrapper_gen = Command::new(&gradle)
            .arg("wrapper")
            .current_dir(&root)
            .status()
            .map_err(HarnessError::SpawnFailed)?;
        if !wrapper_gen.success() {
            return Ok(TestRun::Failed {
                exit_code: wrapper_gen.code().unwrap_or(-1),
            });
        }

        let wrapper = root.join(self.config.wrapper_file_name());
        let status = Command::new(&wrapper)
            .arg("test")
            .arg("jacocoTestReport")
            .current_dir(&root)
            .status()
            .map_err(HarnessError::SpawnFailed)?;

        if status.success() {
            Ok(TestRun::Passed)
        } else {
            Ok(TestRun::Failed {
                exit_code: status.code().unwrap_or(-1),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_gradle_is_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = HarnessConfig::with_root(dir.path());
        let runner = GradleRunner::new(&config);
        // Only assert when gradle genuinely is not installed on the host.
        if which::which("gradle").is_err() {
            assert!(matches!(
                runner.find_gradle(),
                Err(HarnessError::GradleNotFound)
            ));
        }
    }

    #[test]
    fn test_config_override_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("gradle");
        std::fs::write(&fake, "").unwrap();

        let config = HarnessConfig::with_root(dir.path()).gradle_path(&fake);
        let runner = GradleRunner::new(&config);

        assert_eq!(runner.find_gradle().unwrap(), fake.canonicalize().unwrap());
    }

    #[test]
    fn test_missing_override_is_an_error_not_a_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            HarnessConfig::with_root(dir.path()).gradle_path(dir.path().join("no-such-gradle"));
        let runner = GradleRunner::new(&config);

        // A pinned executable that does not exist must not silently fall
        // back to whatever gradle happens to be on PATH.
        assert!(matches!(
            runner.find_gradle(),
            Err(HarnessError::GradleOverrideMissing { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_maps_to_failed() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        // Stub "gradle" succeeds at wrapper generation and writes a wrapper
        // script that fails, mimicking a failing test task.
        let stub = dir.path().join("gradle-stub");
        fs::write(
            &stub,
            "#!/bin/sh\nprintf '#!/bin/sh\\nexit 1\\n' > gradlew\nchmod +x gradlew\nexit 0\n",
        )
        .unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let config = HarnessConfig::with_root(dir.path()).gradle_path(&stub);
        let runner = GradleRunner::new(&config);

        assert_eq!(runner.run().unwrap(), TestRun::Failed { exit_code: 1 });
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_maps_to_passed() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("gradle-stub");
        fs::write(
            &stub,
            "#!/bin/sh\nprintf '#!/bin/sh\\nexit 0\\n' > gradlew\nchmod +x gradlew\nexit 0\n",
        )
        .unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let config = HarnessConfig::with_root(dir.path()).gradle_path(&stub);
        let runner = GradleRunner::new(&config);

        assert_eq!(runner.run().unwrap(), TestRun::Passed);
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_wrapper_generation_maps_to_failed() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("gradle-stub");
        fs::write(&stub, "#!/bin/sh\nexit 7\n").unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let config = HarnessConfig::with_root(dir.path()).gradle_path(&stub);
        let runner = GradleRunner::new(&config);

        assert_eq!(runner.run().unwrap(), TestRun::Failed { exit_code: 7 });
    }
}
