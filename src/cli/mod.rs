//! CLI module for the nepl front end
//!
//! ## Usage
//!
//! - `nepl --source <FILE>` - Dump the token stream
//! - `nepl --source <FILE> --parse` - Dump one S-expression per statement
//! - `nepl --source <FILE> --parse --operators` - Also dump the final operator table
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Printed when no source file is given.
pub const USAGE_NOTICE: &str = "No input files specified. Use --help or -h to see help.";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lex and parse nepl source files
#[derive(Parser, Debug)]
#[command(name = "nepl")]
#[command(version = VERSION)]
#[command(about = "Lex and parse nepl source files", long_about = None)]
pub struct Cli {
    /// Source file to read
    #[arg(short = 's', long = "source", value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Parse into expression trees instead of dumping tokens
    #[arg(long)]
    pub parse: bool,

    /// Dump the operator table left by the directives
    #[arg(long, requires = "parse")]
    pub operators: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let Some(path) = cli.source else {
        eprintln!("{USAGE_NOTICE}");
        return Ok(ExitCode::SUCCESS);
    };
    let file = path.to_string_lossy();

    if cli.parse {
        commands::parse_file(&file, cli.operators)
    } else {
        commands::lex_file(&file)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_source_flags() {
        let cli = Cli::try_parse_from(["nepl", "--source", "prog.nepl"]).unwrap();
        assert_eq!(cli.source.as_deref(), Some(std::path::Path::new("prog.nepl")));
        assert!(!cli.parse);

        let cli = Cli::try_parse_from(["nepl", "-s", "prog.nepl", "--parse", "--operators"]).unwrap();
        assert!(cli.parse);
        assert!(cli.operators);
    }

    #[test]
    fn test_cli_operators_requires_parse() {
        assert!(Cli::try_parse_from(["nepl", "-s", "prog.nepl", "--operators"]).is_err());
    }

    #[test]
    fn test_no_source_is_not_an_error() {
        let cli = Cli::try_parse_from(["nepl"]).unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_missing_file_fails() {
        let cli = Cli::try_parse_from(["nepl", "-s", "/nonexistent/prog.nepl"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(err.message, "File \"/nonexistent/prog.nepl\" not available!");
    }
}
