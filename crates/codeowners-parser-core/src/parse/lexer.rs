//! Lexer and token parsers for CODEOWNERS files.
//!
//! This module contains nom-based parsers that split a line into
//! whitespace-separated fields, plus the owner token classifier.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::rest,
    multi::many0,
    sequence::{preceded, terminated},
};

/// Characters that can appear inside a field.
fn is_field_char(c: char) -> bool {
    !c.is_whitespace()
}

/// Consumes any run of whitespace, including none.
fn whitespace0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

/// Parses one field, skipping the whitespace before it.
fn field(input: &str) -> IResult<&str, &str> {
    preceded(whitespace0, take_while1(is_field_char)).parse(input)
}

/// Parses a complete comment line (optional whitespace + # + content).
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (whitespace0, char('#'), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Returns true if the field starts a trailing comment.
pub fn is_comment_field(field: &str) -> bool {
    field.starts_with('#')
}

/// Splits a line into fields on runs of whitespace.
///
/// Leading and trailing whitespace produce no empty fields.
pub fn split_fields(input: &str) -> Vec<&str> {
    terminated(many0(field), whitespace0)
        .parse(input)
        .map(|(_, fields)| fields)
        .unwrap_or_default()
}

/// Classification of an owner token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerKind<'a> {
    /// A GitHub user (`@username`), holding the name without the `@`.
    User(&'a str),
    /// A GitHub team (`@org/team`), split at the first `/`.
    Team { org: &'a str, team: &'a str },
    /// An email address (contains `@`, but not as the first character).
    Email(&'a str),
    /// Anything else. Never becomes an owner.
    Invalid(&'a str),
}

impl OwnerKind<'_> {
    /// Returns true unless the token is [`OwnerKind::Invalid`].
    pub fn is_valid(&self) -> bool {
        !matches!(self, OwnerKind::Invalid(_))
    }
}

/// Classifies an owner token.
///
/// Exactly one variant applies to any string. Only the shape is checked:
/// handles and email addresses are not validated further.
pub fn classify_owner(text: &str) -> OwnerKind<'_> {
    if let Some(stripped) = text.strip_prefix('@') {
        return match stripped.split_once('/') {
            Some((org, team)) => OwnerKind::Team { org, team },
            None => OwnerKind::User(stripped),
        };
    }

    if text.contains('@') {
        OwnerKind::Email(text)
    } else {
        OwnerKind::Invalid(text)
    }
}
