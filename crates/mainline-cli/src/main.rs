//! mainline CLI - batch-test Java candidates against a fixed JUnit test
//!
//! This binary discovers candidate `.java` files, renames each file's public
//! class to `Main`, and runs the fixed `MainTest.java` against every
//! candidate in a throwaway Gradle project with JaCoCo coverage.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use mainline_cli::commands;

/// mainline - batch JUnit harness for single-class Java candidates
#[derive(Parser)]
#[command(name = "mainline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover, rename, and test every candidate in the working directory
    Run {
        /// Working directory to discover candidates in (default: current directory)
        #[arg(short, long)]
        dir: Option<String>,

        /// Fixed test filename expected at the working-directory root
        #[arg(long)]
        test_file: Option<String>,

        /// Explicit path to the Gradle executable (default: search PATH)
        #[arg(long)]
        gradle: Option<String>,

        /// Write a JSON pass/fail report to this path
        #[arg(long)]
        report: Option<String>,
    },

    /// Remove generated scaffold artifacts left by an interrupted run
    Clean {
        /// Working directory to sweep (default: current directory)
        #[arg(short, long)]
        dir: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            dir,
            test_file,
            gradle,
            report,
        } => commands::run::run(
            dir.as_deref(),
            test_file.as_deref(),
            gradle.as_deref(),
            report.as_deref(),
        ),
        Commands::Clean { dir } => commands::clean::run(dir.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_run() {
        let cli = Cli::try_parse_from([
            "mainline",
            "run",
            "--dir",
            "work",
            "--report",
            "out.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                dir,
                test_file,
                gradle,
                report,
            } => {
                assert_eq!(dir.as_deref(), Some("work"));
                assert_eq!(test_file, None);
                assert_eq!(gradle, None);
                assert_eq!(report.as_deref(), Some("out.json"));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_parses_clean() {
        let cli = Cli::try_parse_from(["mainline", "clean"]).unwrap();
        match cli.command {
            Commands::Clean { dir } => assert_eq!(dir, None),
            _ => panic!("expected clean command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["mainline", "frobnicate"]).is_err());
    }
}
