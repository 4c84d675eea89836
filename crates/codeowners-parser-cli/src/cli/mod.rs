//! CLI module for the CODEOWNERS parser.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::Parser;
use codeowners_parser_core::parse::DEFAULT_MAX_LINE_LENGTH;
use std::path::PathBuf;

/// CODEOWNERS file parser - prints the path to owner mappings of a file.
///
/// Comments, blank lines and unrecognised owner tokens are skipped.
/// Supports both human-readable and JSON output formats.
#[derive(Parser, Debug)]
#[command(name = "codeowners-parse")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the CODEOWNERS file. Reads standard input when omitted or "-".
    #[arg(env = "CODEOWNERS_PATH")]
    pub path: Option<PathBuf>,

    /// Maximum line length in bytes. 0 disables the limit.
    #[arg(long, env = "CODEOWNERS_MAX_LINE_LENGTH", default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    pub max_line_length: usize,

    /// Output mappings as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns the line length limit, with 0 meaning unlimited.
    pub fn effective_max_line_length(&self) -> Option<usize> {
        match self.max_line_length {
            0 => None,
            limit => Some(limit),
        }
    }

    /// Returns true if input should come from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.path
            .as_deref()
            .is_none_or(|path| path.as_os_str() == "-")
    }
}
