//! Per-candidate Gradle scaffold.
//!
//! Each candidate is tested inside a minimal single-module Gradle project
//! assembled at the working-directory root and deleted again afterwards.
//! [`Scaffold`] is a scoped acquisition: building one lays the tree out,
//! dropping one tears everything down, so the teardown runs on every exit
//! path including a failed test invocation.

use std::fs;
use std::path::Path;

use crate::config::HarnessConfig;
use crate::error::{HarnessError, HarnessResult};

/// Fixed build configuration written at the scaffold root. Compiles with the
/// `java` plugin, instruments with JaCoCo, runs JUnit Jupiter 5.9.2 on the
/// JUnit platform with verbose test-event logging, and finishes by parsing
/// the CSV coverage report into a human-readable instruction percentage.
const BUILD_GRADLE_TEMPLATE: &str = r#"plugins {
    id 'java'
    id 'jacoco'
}

repositories {
    mavenCentral()
}

dependencies {
    testImplementation 'org.junit.jupiter:junit-jupiter-api:5.9.2'
    testRuntimeOnly 'org.junit.jupiter:junit-jupiter-engine:5.9.2'
}

test {
    useJUnitPlatform()
    finalizedBy jacocoTestReport

    testLogging {
        events 'passed', 'skipped', 'failed'
        showExceptions true
        showCauses true
        showStackTraces true
    }
}

jacocoTestReport {
    reports {
        csv.required = true
        html.required = false
    }
    doLast {
        def coverageFile = new File("${buildDir}/reports/jacoco/test/jacocoTestReport.csv")
        if (coverageFile.exists()) {
            println "\nCode Coverage Summary"
            println "===================\n"
            def lines = coverageFile.readLines()
            if (lines.size() > 1) {
                def data = lines[1].split(',')
                def instructionsCoverage = ((data[4].toInteger() - data[3].toInteger()) * 100.0 / data[4].toInteger())
                println "Instructions covered: ${String.format('%.2f', instructionsCoverage)}%"
            }
            println "==================="
        }
    }
}
"#;

/// Directories removed by the teardown sweep, relative to the root.
const GENERATED_DIRS: &[&str] = &["build", "src", ".gradle", "gradle"];

/// Top-level files removed by the teardown sweep, relative to the root.
const GENERATED_FILES: &[&str] = &["gradlew", "gradlew.bat"];

/// The assembled per-candidate project tree. Dropping it removes every
/// generated directory and file, best-effort.
#[derive(Debug)]
pub struct Scaffold {
    config: HarnessConfig,
}

impl Scaffold {
    /// Lays out the scaffold for one candidate: creates the source trees
    /// (tolerating pre-existing directories), copies the fixed test file and
    /// the candidate's content into their canonical slots, and writes the
    /// build configuration.
    ///
    /// The candidate overwrites whatever previously occupied the canonical
    /// main-source slot, so at most one candidate is ever present.
    pub fn build(config: &HarnessConfig, candidate: &Path) -> HarnessResult<Self> {
        let test_source = config.test_source_path();
        if !test_source.exists() {
            return Err(HarnessError::TestFileMissing { path: test_source });
        }

        let main_dir = config.root.join(&config.src_main);
        let test_dir = config.root.join(&config.src_test);
        fs::create_dir_all(&main_dir)?;
        fs::create_dir_all(&test_dir)?;

        let test_dest = config.test_dest_path();
        fs::copy(&test_source, &test_dest)
            .map_err(|e| HarnessError::copy_failed(&test_source, &test_dest, e))?;

        let main_dest = config.main_file_path();
        fs::copy(candidate, &main_dest)
            .map_err(|e| HarnessError::copy_failed(candidate, &main_dest, e))?;

        let build_file = config.build_file_path();
        fs::write(&build_file, BUILD_GRADLE_TEMPLATE)
            .map_err(|e| HarnessError::write_failed(&build_file, e))?;

        Ok(Self {
            config: config.clone(),
        })
    }
}

impl Drop for Scaffold {
    fn drop(&mut self) {
        cleanup(&self.config);
    }
}

/// Best-effort removal of all generated directories and files under the
/// config root. Missing paths are not errors; removal failures are ignored.
pub fn cleanup(config: &HarnessConfig) {
    for dir in GENERATED_DIRS {
        let _ = fs::remove_dir_all(config.root.join(dir));
    }
    for file in GENERATED_FILES {
        let _ = fs::remove_file(config.root.join(file));
    }
    let _ = fs::remove_file(config.build_file_path());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn seed_workdir(dir: &tempfile::TempDir) -> HarnessConfig {
        let config = HarnessConfig::with_root(dir.path());
        fs::write(
            config.test_source_path(),
            "public class MainTest { void t() { new Main(); } }\n",
        )
        .unwrap();
        config
    }

    #[test]
    fn test_build_lays_out_project_tree() {
        let dir = tempfile::tempdir().unwrap();
        let config = seed_workdir(&dir);
        let candidate = dir.path().join("Foo.java");
        fs::write(&candidate, "public class Main {}\n").unwrap();

        let scaffold = Scaffold::build(&config, &candidate).unwrap();

        assert_eq!(
            fs::read_to_string(config.main_file_path()).unwrap(),
            "public class Main {}\n"
        );
        assert!(config.test_dest_path().exists());
        let build_gradle = fs::read_to_string(config.build_file_path()).unwrap();
        assert!(build_gradle.contains("id 'jacoco'"));
        assert!(build_gradle.contains("useJUnitPlatform()"));
        assert!(build_gradle.contains("junit-jupiter-api:5.9.2"));

        drop(scaffold);
        assert!(!dir.path().join("src").exists());
        assert!(!config.build_file_path().exists());
    }

    #[test]
    fn test_build_tolerates_existing_dirs_and_overwrites_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let config = seed_workdir(&dir);

        let first = dir.path().join("A.java");
        let second = dir.path().join("B.java");
        fs::write(&first, "public class Main { int a; }\n").unwrap();
        fs::write(&second, "public class Main { int b; }\n").unwrap();

        // Leave the trees in place between builds to exercise idempotence.
        fs::create_dir_all(dir.path().join("src/main/java")).unwrap();
        let s1 = Scaffold::build(&config, &first).unwrap();
        std::mem::forget(s1);
        let _s2 = Scaffold::build(&config, &second).unwrap();

        assert_eq!(
            fs::read_to_string(config.main_file_path()).unwrap(),
            "public class Main { int b; }\n"
        );
    }

    #[test]
    fn test_build_fails_without_test_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = HarnessConfig::with_root(dir.path());
        let candidate = dir.path().join("Foo.java");
        fs::write(&candidate, "public class Main {}\n").unwrap();

        let err = Scaffold::build(&config, &candidate).unwrap_err();
        assert!(matches!(err, HarnessError::TestFileMissing { .. }));
    }

    #[test]
    fn test_cleanup_tolerates_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = HarnessConfig::with_root(dir.path());
        // Nothing was ever created; this must not panic or error.
        cleanup(&config);
        cleanup(&config);
    }

    #[test]
    fn test_cleanup_removes_wrapper_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let config = HarnessConfig::with_root(dir.path());
        fs::create_dir_all(dir.path().join("build/reports")).unwrap();
        fs::create_dir_all(dir.path().join(".gradle")).unwrap();
        fs::create_dir_all(dir.path().join("gradle/wrapper")).unwrap();
        fs::write(dir.path().join("gradlew"), "#!/bin/sh\n").unwrap();
        fs::write(dir.path().join("gradlew.bat"), "@echo off\n").unwrap();
        fs::write(config.build_file_path(), "plugins {}\n").unwrap();

        cleanup(&config);

        assert!(!dir.path().join("build").exists());
        assert!(!dir.path().join(".gradle").exists());
        assert!(!dir.path().join("gradle").exists());
        assert!(!dir.path().join("gradlew").exists());
        assert!(!dir.path().join("gradlew.bat").exists());
        assert!(!config.build_file_path().exists());
    }
}
