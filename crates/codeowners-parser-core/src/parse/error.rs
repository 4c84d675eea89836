//! Error types for CODEOWNERS file parsing.
//!
//! Malformed lines and unrecognised owners are never errors; they are left
//! out of the result. The only failures are those that stop the input from
//! being read at all.

use std::io;
use std::str::Utf8Error;
use thiserror::Error;

/// An error that aborted parsing of an input stream.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("line {line}: failed to read input: {source}")]
    Io {
        /// The line being read when the failure occurred (1-based).
        line: usize,
        /// The I/O error reported by the reader.
        #[source]
        source: io::Error,
    },

    /// A line was not valid UTF-8.
    #[error("line {line}: input is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// The offending line (1-based).
        line: usize,
        /// Details of the decoding failure.
        #[source]
        source: Utf8Error,
    },

    /// A line exceeded the configured maximum length.
    #[error("line {line}: line exceeds the maximum length of {limit} bytes")]
    LineTooLong {
        /// The offending line (1-based).
        line: usize,
        /// The configured limit in bytes.
        limit: usize,
    },
}

impl ParseError {
    /// Creates an I/O error.
    pub fn io(line: usize, source: io::Error) -> Self {
        Self::Io { line, source }
    }

    /// Creates an invalid UTF-8 error.
    pub fn invalid_utf8(line: usize, source: Utf8Error) -> Self {
        Self::InvalidUtf8 { line, source }
    }

    /// Creates a line too long error.
    pub fn line_too_long(line: usize, limit: usize) -> Self {
        Self::LineTooLong { line, limit }
    }

    /// Returns the line number where this error occurred.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Io { line, .. } => *line,
            ParseError::InvalidUtf8 { line, .. } => *line,
            ParseError::LineTooLong { line, .. } => *line,
        }
    }
}
