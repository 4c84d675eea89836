//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration types
//! and opens the input the parser reads from.

use crate::cli::Args;
use codeowners_parser_core::{Mapping, ParseError, ParserConfig, parse_reader_with_config};
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the CODEOWNERS input.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open CODEOWNERS file '{}': {source}", .path.display())]
    Open {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input could not be read to the end.
    #[error("failed to read {input}: {source}")]
    Read {
        /// Description of the input.
        input: InputSource,
        /// The parser error.
        #[source]
        source: ParseError,
    },
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Mappings were parsed and printed.
    Success = 0,
    /// The input could not be opened or output could not be written.
    StartupFailure = 1,
    /// The input failed part way through reading.
    ReadFailed = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<&CliError> for ExitCode {
    fn from(error: &CliError) -> Self {
        match error {
            CliError::Open { .. } => ExitCode::StartupFailure,
            CliError::Read { .. } => ExitCode::ReadFailed,
        }
    }
}

/// Where the CODEOWNERS content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Opens the source for reading.
    ///
    /// The returned reader is owned by the caller and closed when dropped.
    pub fn open(&self) -> Result<Box<dyn Read>, CliError> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| CliError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(file))
            }
        }
    }
}

impl Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("standard input"),
            InputSource::File(path) => write!(f, "'{}'", path.display()),
        }
    }
}

/// Validated and processed configuration for running the parser.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Where to read from.
    pub source: InputSource,
    /// Configuration for the stream parser.
    pub parser_config: ParserConfig,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Self {
        let source = match &args.path {
            Some(path) if !args.reads_stdin() => InputSource::File(path.clone()),
            _ => InputSource::Stdin,
        };

        Self {
            source,
            parser_config: ParserConfig::new()
                .with_max_line_length(args.effective_max_line_length()),
            json_output: args.json,
        }
    }

    /// Opens the input and parses it into mappings.
    pub fn load(&self) -> Result<Vec<Mapping>, CliError> {
        let reader = self.source.open()?;
        parse_reader_with_config(reader, &self.parser_config).map_err(|source| CliError::Read {
            input: self.source.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn create_codeowners(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CODEOWNERS");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn config_for(args: &[&str]) -> ValidatedConfig {
        let args = Args::parse_from(std::iter::once("codeowners-parse").chain(args.iter().copied()));
        ValidatedConfig::from_args(&args)
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::StartupFailure), 1);
        assert_eq!(i32::from(ExitCode::ReadFailed), 2);
    }

    #[test]
    fn test_stdin_source_by_default() {
        let config = config_for(&[]);
        assert_eq!(config.source, InputSource::Stdin);
        assert_eq!(config.source.to_string(), "standard input");
        assert!(!config.json_output);
    }

    #[test]
    fn test_file_source() {
        let config = config_for(&["docs/CODEOWNERS", "--json"]);
        assert_eq!(
            config.source,
            InputSource::File(PathBuf::from("docs/CODEOWNERS"))
        );
        assert!(config.json_output);
    }

    #[test]
    fn test_parser_config_from_args() {
        let config = config_for(&["--max-line-length", "0"]);
        assert_eq!(config.parser_config, ParserConfig::unlimited());
    }

    #[test]
    fn test_load_file() {
        let (_dir, path) = create_codeowners("# owners\n* @user1\nfoo/* @user2 email@example.com\n");
        let config = config_for(&[path.to_str().unwrap()]);

        let mappings = config.load().unwrap();
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[1].path, "foo/*");
        assert_eq!(mappings[1].owners, ["@user2", "email@example.com"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CODEOWNERS");
        let config = config_for(&[path.to_str().unwrap()]);

        let error = config.load().unwrap_err();
        assert!(matches!(error, CliError::Open { .. }));
        assert_eq!(ExitCode::from(&error), ExitCode::StartupFailure);
        assert!(error.to_string().contains("failed to open"));
    }

    #[test]
    fn test_load_read_failure() {
        let (_dir, path) = create_codeowners("* @a\n/docs/ @a-very-long-owner-name\n");
        let config = config_for(&[path.to_str().unwrap(), "--max-line-length", "10"]);

        let error = config.load().unwrap_err();
        assert!(matches!(
            error,
            CliError::Read {
                source: ParseError::LineTooLong { line: 2, .. },
                ..
            }
        ));
        assert_eq!(ExitCode::from(&error), ExitCode::ReadFailed);
    }
}
