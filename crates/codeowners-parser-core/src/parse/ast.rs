//! Data structures produced by the CODEOWNERS parser.
//!
//! A parsed file is an ordered list of [`Mapping`]s, each pairing one path
//! pattern with the [`Owner`]s listed after it on the same line.

use super::lexer::{OwnerKind, classify_owner};
use serde::Serialize;
use std::fmt::{self, Display};

/// An owner token taken verbatim from a mapping line.
///
/// Only tokens that classify as a GitHub user, a GitHub team or an email
/// address can be turned into an `Owner`; see [`classify_owner`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    /// Creates an owner from a raw token, or `None` if the token is not a
    /// recognised owner format.
    pub fn parse(text: &str) -> Option<Self> {
        match classify_owner(text) {
            OwnerKind::Invalid(_) => None,
            _ => Some(Self(text.to_string())),
        }
    }

    /// Returns the owner exactly as written in the source.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the classification of this owner.
    ///
    /// Never returns [`OwnerKind::Invalid`].
    pub fn kind(&self) -> OwnerKind<'_> {
        classify_owner(&self.0)
    }

    /// Returns true if this is a GitHub user (`@name`).
    pub fn is_user(&self) -> bool {
        matches!(self.kind(), OwnerKind::User(_))
    }

    /// Returns true if this is a GitHub team (`@org/team`).
    pub fn is_team(&self) -> bool {
        matches!(self.kind(), OwnerKind::Team { .. })
    }

    /// Returns true if this is an email address.
    pub fn is_email(&self) -> bool {
        matches!(self.kind(), OwnerKind::Email(_))
    }

    /// Consumes the owner, returning the raw token.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Owner {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Owner {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Owner {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One parsed line: a path pattern and its owners.
///
/// The path is opaque; glob syntax is not interpreted. Owners keep their
/// left-to-right order and duplicates, and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    /// The path pattern (first field of the line).
    pub path: String,
    /// Owners in source order.
    pub owners: Vec<Owner>,
}

impl Mapping {
    /// Creates a new mapping.
    pub fn new(path: impl Into<String>, owners: Vec<Owner>) -> Self {
        Self {
            path: path.into(),
            owners,
        }
    }

    /// Returns true if no valid owner was listed for the path.
    pub fn is_unowned(&self) -> bool {
        self.owners.is_empty()
    }

    /// Iterates over the owners as string slices.
    pub fn owner_strs(&self) -> impl Iterator<Item = &str> {
        self.owners.iter().map(Owner::as_str)
    }
}

impl Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for owner in &self.owners {
            write!(f, " {}", owner)?;
        }
        Ok(())
    }
}
