//! Parser for color markup.
//!
//! This module contains the tag scanner, the escape resolver and the tree
//! builder that ties them together.

mod builder;
mod escape;
mod scanner;

pub use builder::{Parser, parse, parse_with};
pub use escape::{escape, unescape};
pub use scanner::{Scanner, TagToken, Token, scan_tags};
