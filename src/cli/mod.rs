//! CLI module for testshim
//!
//! ## Commands
//!
//! - `demo` - Run the bundled demo suite
//! - `list` - Print the demo suite's description tree
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::demo::demo_suite;
use crate::runner::{ConsoleReporter, RunConfig, Runner};

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
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Call-recording stubs and a small test harness
#[derive(Parser, Debug)]
#[command(name = "testshim")]
#[command(version = VERSION)]
#[command(about = "Call-recording stubs and a small test harness", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the bundled demo suite
    Demo {
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
        /// Stop on first failure
        #[arg(short = 'x', long = "exitfirst")]
        stop_on_fail: bool,
        /// Filter tests by keyword
        #[arg(short = 'k', value_name = "EXPR")]
        filter: Option<String>,
    },

    /// Print the demo suite's description tree
    List,
}

impl Command {
    /// Runner configuration implied by the flags (defaults for commands that do not run tests).
    pub fn run_config(&self) -> RunConfig {
        match self {
            Command::Demo {
                verbose,
                stop_on_fail,
                filter,
            } => {
                let config = RunConfig::new()
                    .with_verbose(*verbose)
                    .with_stop_on_fail(*stop_on_fail);
                match filter {
                    Some(keyword) => config.with_filter(keyword.as_str()),
                    None => config,
                }
            }
            Command::List => RunConfig::new(),
        }
    }
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
    let config = cli.command.run_config();
    match cli.command {
        Command::Demo { .. } => run_demo(config),
        Command::List => {
            println!("{}", demo_suite().describe());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_demo(config: RunConfig) -> CliResult<ExitCode> {
    let suite = demo_suite();
    let mut reporter = ConsoleReporter::new(config.verbose);
    let summary = Runner::new(config).run(&suite, &mut reporter);

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Summary already printed by the reporter
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

// ============================================================================
// Tests
// ============================================================================
