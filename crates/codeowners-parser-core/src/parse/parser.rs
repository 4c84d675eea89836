//! Line and stream-level parsers for CODEOWNERS files.
//!
//! This module combines the lexer components to turn single lines and
//! whole inputs into [`Mapping`]s.

use super::ast::{Mapping, Owner};
use super::error::ParseError;
use super::lexer::{is_comment_field, parse_comment_line, split_fields};
use log::{debug, trace};
use std::io::{BufRead, BufReader, Read};

/// Default maximum length of a single line, in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// A mapping line needs a path and at least one more field.
const MIN_FIELDS: usize = 2;

/// Configuration options for the stream parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum length of a line in bytes, excluding the line terminator.
    /// Longer lines abort parsing. `None` disables the check.
    pub max_line_length: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line_length: Some(DEFAULT_MAX_LINE_LENGTH),
        }
    }
}

impl ParserConfig {
    /// Creates a new parser config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config without a line length limit.
    pub fn unlimited() -> Self {
        Self {
            max_line_length: None,
        }
    }

    /// Sets the maximum line length.
    pub fn with_max_line_length(mut self, value: Option<usize>) -> Self {
        self.max_line_length = value;
        self
    }
}

/// Parses a single line into a mapping.
///
/// Returns `None` for whole-line comments and for lines with fewer than two
/// fields (which includes blank lines). Any other line yields a mapping,
/// even if none of its owner tokens are valid. A field starting with `#`
/// ends the owner list.
pub fn parse_line(line: &str) -> Option<Mapping> {
    let trimmed = line.trim();

    if parse_comment_line(trimmed).is_ok() {
        return None;
    }

    let fields = split_fields(trimmed);
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let path = fields[0];
    let owners: Vec<Owner> = fields[1..]
        .iter()
        .take_while(|field| !is_comment_field(field))
        .filter_map(|field| {
            let owner = Owner::parse(field);
            if owner.is_none() {
                trace!("Skipping invalid owner '{}' for '{}'", field, path);
            }
            owner
        })
        .collect();

    Some(Mapping::new(path, owners))
}

/// Parses CODEOWNERS content that is already in memory.
///
/// The line length limit does not apply.
pub fn parse_str(input: &str) -> Vec<Mapping> {
    let mappings: Vec<Mapping> = input.lines().filter_map(parse_line).collect();
    debug!(
        "Parsed {} mapping(s) from {} bytes",
        mappings.len(),
        input.len()
    );
    mappings
}

/// Parses a CODEOWNERS stream using the default configuration.
pub fn parse_reader<R: Read>(reader: R) -> Result<Vec<Mapping>, ParseError> {
    parse_reader_with_config(reader, &ParserConfig::default())
}

/// Parses a CODEOWNERS stream with the given configuration.
///
/// Lines end at `\n` or end of input; a `\r` before the `\n` is dropped.
/// On a read, decoding or line length failure the mappings collected so far
/// are discarded and only the error is returned.
pub fn parse_reader_with_config<R: Read>(
    reader: R,
    config: &ParserConfig,
) -> Result<Vec<Mapping>, ParseError> {
    debug!(
        "Parsing CODEOWNERS stream (max_line_length={:?})",
        config.max_line_length
    );
    let mut reader = BufReader::new(reader);
    // Room for the terminator so an exactly-at-limit line still fits.
    let read_cap = config
        .max_line_length
        .map_or(u64::MAX, |limit| (limit as u64).saturating_add(2));

    let mut mappings = Vec::new();
    let mut buf = Vec::new();
    let mut line_num = 0;

    loop {
        buf.clear();
        let read = (&mut reader)
            .take(read_cap)
            .read_until(b'\n', &mut buf)
            .map_err(|e| ParseError::io(line_num + 1, e))?;
        if read == 0 {
            break;
        }
        line_num += 1;

        let terminated = buf.ends_with(b"\n");
        if terminated {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        if let Some(limit) = config.max_line_length {
            if buf.len() > limit || (!terminated && read as u64 == read_cap) {
                debug!("Line {}: exceeds {} bytes, aborting", line_num, limit);
                return Err(ParseError::line_too_long(line_num, limit));
            }
        }

        let text =
            std::str::from_utf8(&buf).map_err(|e| ParseError::invalid_utf8(line_num, e))?;

        match parse_line(text) {
            Some(mapping) => {
                trace!("Line {}: mapping for '{}'", line_num, mapping.path);
                mappings.push(mapping);
            }
            None => trace!("Line {}: no mapping", line_num),
        }
    }

    debug!(
        "Parsing complete: {} lines, {} mapping(s)",
        line_num,
        mappings.len()
    );
    Ok(mappings)
}
