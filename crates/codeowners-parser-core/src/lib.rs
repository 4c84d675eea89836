//! CODEOWNERS Parser Core
//!
//! A library for parsing CODEOWNERS-style ownership files into an ordered
//! list of path pattern to owner mappings.
//!
//! # Features
//!
//! - **Parser**: Read any [`std::io::Read`] source line by line into [`Mapping`]s
//! - **Owner classification**: GitHub users, GitHub teams and email addresses
//! - **Line tolerant**: Malformed lines and unknown owners are skipped, never fatal
//!
//! # Quick Start
//!
//! ```rust
//! use codeowners_parser_core::parse_reader;
//!
//! let input = r#"
//! # CODEOWNERS file
//! *.rs @rustacean
//! /docs/ @github/docs-team docs@example.com # documentation
//! "#;
//!
//! match parse_reader(input.as_bytes()) {
//!     Ok(mappings) => {
//!         for mapping in &mappings {
//!             println!("Pattern: {} -> {:?}", mapping.path, mapping.owners);
//!         }
//!     }
//!     Err(error) => eprintln!("Failed to read CODEOWNERS: {}", error),
//! }
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Parser for CODEOWNERS files
//! - `generate`: Synthetic CODEOWNERS content for benchmarks (feature `generate`)

#[cfg(feature = "generate")]
pub mod generate;
pub mod parse;

// Re-export commonly used types at the crate root
pub use parse::{
    Mapping, Owner, OwnerKind, ParseError, ParserConfig, parse_line, parse_reader,
    parse_reader_with_config, parse_str,
};
