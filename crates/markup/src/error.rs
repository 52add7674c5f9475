//! Error types for the markup crate.
//!
//! Parsing markup never fails; these errors only arise while building a
//! [`NameRegistry`](crate::NameRegistry) or naming a color.

use thiserror::Error;

/// Errors that can occur when building a name registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Tag names must be one or more ASCII letters.
    #[error("invalid tag name: {0:?}")]
    InvalidName(String),

    /// Two entries folded to the same lowercase name.
    #[error("duplicate tag name: {0}")]
    DuplicateName(String),
}

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}
