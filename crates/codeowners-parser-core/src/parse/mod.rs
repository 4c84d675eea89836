//! Parser module for CODEOWNERS files.
//!
//! This module turns CODEOWNERS-style content into an ordered list of
//! [`Mapping`]s. Comments, blank lines and lines without owner fields are
//! skipped; unrecognised owner tokens are dropped.
//!
//! # Example
//!
//! ```rust
//! use codeowners_parser_core::parse::parse_reader;
//!
//! let input = "# CODEOWNERS file\n*.rs @rustacean\n/docs/ @org/docs-team # docs\n";
//!
//! let mappings = parse_reader(input.as_bytes()).unwrap();
//! assert_eq!(mappings.len(), 2);
//! for mapping in &mappings {
//!     println!("{} -> {:?}", mapping.path, mapping.owners);
//! }
//! ```

mod ast;
mod error;
mod lexer;
mod parser;

// Re-export public types
pub use ast::{Mapping, Owner};
pub use error::ParseError;
pub use parser::{
    DEFAULT_MAX_LINE_LENGTH, ParserConfig, parse_line, parse_reader, parse_reader_with_config,
    parse_str,
};

// Re-export lexer utilities that may be useful for custom parsing
pub use lexer::{OwnerKind, classify_owner, split_fields};
