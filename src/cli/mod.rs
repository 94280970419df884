//! CLI module for the Rigid generator
//!
//! This module provides the command-line interface:
//!
//! ```text
//! rigid <PROJECT_PATH> <DESTINATION_DIR> [--indent-width N] [--stdout]
//! ```
//!
//! The directory containing `PROJECT_PATH` is scanned and `Rigid.swift` is written into `DESTINATION_DIR`.
//!
//! ## Modules
//!
//! - `commands` - The generate command (scan, render, write, timing)
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
use miette::Diagnostic;

use crate::emit::EmitConfig;
use crate::scan::ScanError;
use crate::version::RIGID_VERSION;

use commands::Output;

/// Logged when the project path argument is missing.
pub const MISSING_PROJECT_PATH: &str = "Rigid is expecting a path to your project file.";
/// Logged when the destination argument is missing.
pub const MISSING_DESTINATION: &str = "Rigid is expecting a destination path for the generated Rigid.swift file.";
/// Logged when the project path has no parent directory to scan.
pub const UNUSABLE_PROJECT_PATH: &str = "Unable to process provided path of project file.";

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
/// catches these errors, logs the message, and exits with the code.
#[derive(Debug)]
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

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ScanError> for CliError {
    fn from(err: ScanError) -> Self {
        let mut message = err.to_string();
        let ScanError::Enumerate { source, .. } = &err;
        message.push_str(&format!(": {source}"));
        if let Some(help) = err.help() {
            message.push_str(&format!(" (help: {help})"));
        }
        CliError::failure(message)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate strongly-typed resource identifiers for an iOS/macOS project
#[derive(Parser, Debug)]
#[command(name = "rigid")]
#[command(version = RIGID_VERSION)]
#[command(about = "Generate strongly-typed resource identifiers (Rigid.swift) for a project", long_about = None)]
pub struct Cli {
    /// Path to the project file; its parent directory is scanned
    #[arg(value_name = "PROJECT_PATH")]
    pub project: Option<PathBuf>,

    /// Directory that receives the generated Rigid.swift
    #[arg(value_name = "DESTINATION_DIR")]
    pub destination: Option<PathBuf>,

    /// Spaces per indentation level in the generated code
    #[arg(long, value_name = "N", default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=16))]
    pub indent_width: u8,

    /// Print the generated document instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    /// Emission settings selected on the command line.
    pub fn emit_config(&self) -> EmitConfig {
        EmitConfig::new().with_indent_width(usize::from(self.indent_width))
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
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                tracing::error!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Validate the arguments and run the generate command.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.emit_config();

    let Some(project) = cli.project else {
        return Err(CliError::failure(MISSING_PROJECT_PATH));
    };

    let output = match (cli.stdout, cli.destination) {
        (true, _) => Output::Stdout,
        (false, Some(destination)) => Output::Directory(destination),
        (false, None) => return Err(CliError::failure(MISSING_DESTINATION)),
    };

    commands::generate(&project, &output, &config)
}

// ============================================================================
// Tests
// ============================================================================
