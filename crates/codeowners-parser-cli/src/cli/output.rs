//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for parsed mappings.

use codeowners_parser_core::{Mapping, Owner, OwnerKind};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// JSON output: the mappings as an array, in source order.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct JsonOutput<'a> {
    mappings: &'a [Mapping],
}

impl<'a> JsonOutput<'a> {
    /// Creates JSON output for the given mappings.
    pub fn new(mappings: &'a [Mapping]) -> Self {
        Self { mappings }
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes one mapping as `path owner...`.
    pub fn write_mapping(&mut self, mapping: &Mapping) -> std::io::Result<()> {
        if !self.use_colors {
            return writeln!(self.writer, "{}", mapping);
        }

        write!(self.writer, "{}", mapping.path.bold())?;
        if mapping.is_unowned() {
            write!(self.writer, " {}", "(no owners)".dimmed())?;
        }
        for owner in &mapping.owners {
            write!(self.writer, " {}", colorize_owner(owner))?;
        }
        writeln!(self.writer)
    }

    /// Writes a summary line.
    pub fn write_summary(&mut self, mappings: &[Mapping]) -> std::io::Result<()> {
        let unowned = mappings.iter().filter(|m| m.is_unowned()).count();
        let message = format!(
            "{} mapping(s), {} without owners",
            mappings.len(),
            unowned
        );

        writeln!(self.writer)?;
        if !self.use_colors {
            writeln!(self.writer, "{}", message)
        } else if unowned > 0 {
            writeln!(self.writer, "{}", message.yellow().bold())
        } else {
            writeln!(self.writer, "{}", message.green().bold())
        }
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}

fn colorize_owner(owner: &Owner) -> colored::ColoredString {
    match owner.kind() {
        OwnerKind::User(_) => owner.as_str().green(),
        OwnerKind::Team { .. } => owner.as_str().cyan(),
        OwnerKind::Email(_) => owner.as_str().magenta(),
        OwnerKind::Invalid(_) => owner.as_str().normal(),
    }
}

/// Writes mappings in human-readable format, followed by a summary.
pub fn write_human<W: Write>(
    writer: &mut W,
    mappings: &[Mapping],
    use_colors: bool,
) -> std::io::Result<()> {
    let mut output = HumanOutput::new(writer, use_colors);

    for mapping in mappings {
        output.write_mapping(mapping)?;
    }

    output.write_summary(mappings)
}

/// Writes mappings in JSON format.
pub fn write_json<W: Write>(writer: &mut W, mappings: &[Mapping]) -> std::io::Result<()> {
    JsonOutput::new(mappings).write(writer)
}
