//! Bracket color markup parser for console text.
//!
//! This crate turns text like `[red]Hello [blue]World[/blue][/red]` into a
//! tree of text and tag nodes that a renderer can walk to color its output.
//!
//! # Overview
//!
//! The markup format uses square brackets around a tag name:
//!
//! - `[red]text[/red]` - Color a region red
//! - `[RED]` - Names are case-insensitive and stored lowercase
//! - `[/anything]` - Close the innermost open tag, whatever its name
//! - `\[\` and `\]\` - Literal `[` and `]`
//!
//! Parsing never fails. Unknown tag names are dropped, stray closers are
//! ignored and tags left open at the end stay open.
//!
//! # Usage
//!
//! ```
//! use markup::{MarkupTree, NameRegistry};
//!
//! let tree = MarkupTree::parse("[red]Hello[/red] World");
//! assert_eq!(tree.plain_text(), "Hello World");
//!
//! // Any set of ASCII-letter names can be used instead of the colors.
//! let registry = NameRegistry::new([("warn", ())]).unwrap();
//! let tree = MarkupTree::parse_with("[warn]careful[/warn]", &registry);
//! assert_eq!(tree.root().child(0).unwrap().tag(), Some("warn"));
//! ```

pub mod color;
pub mod error;
pub mod markup;
pub mod node;
pub mod parser;
pub mod registry;

// Re-export main types at crate root
pub use color::ConsoleColor;
pub use error::{ColorParseError, RegistryError};
pub use markup::{MarkupTree, Walk, WalkEvent};
pub use node::{NodeId, NodeKind, NodeRef};
pub use parser::{parse, parse_with};
pub use registry::{NameRegistry, default_registry};
