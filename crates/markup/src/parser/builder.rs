//! Tree builder for color markup.
//!
//! Combines the scanner and the escape resolver to produce a [`MarkupTree`].

use log::trace;

use crate::markup::MarkupTree;
use crate::node::{NodeId, NodeKind};
use crate::registry::{NameRegistry, default_registry};

use super::escape::unescape;
use super::scanner::{Scanner, TagToken, Token};

/// Parses color markup using the sixteen console color names.
///
/// This is the main entry point for parsing markup text. It never fails:
/// malformed markup degrades into text or is dropped.
///
/// # Examples
///
/// ```
/// use markup::parser::parse;
///
/// let tree = parse("[red]Hello[/red] World");
/// assert_eq!(tree.plain_text(), "Hello World");
/// assert_eq!(tree.root().child(0).unwrap().tag(), Some("red"));
/// ```
pub fn parse(input: &str) -> MarkupTree {
    parse_with(input, default_registry())
}

/// Parses color markup, recognizing the tag names in `registry`.
pub fn parse_with<A>(input: &str, registry: &NameRegistry<A>) -> MarkupTree {
    let mut parser = Parser::new(registry);
    for token in Scanner::new(input) {
        parser.process_token(token);
    }
    parser.finish()
}

/// The tree builder state.
///
/// Tags still open when input ends stay open; their children are whatever
/// was appended before then.
pub struct Parser<'r, A> {
    registry: &'r NameRegistry<A>,
    tree: MarkupTree,
    /// Currently open nodes. The root is always at the bottom.
    stack: Vec<NodeId>,
}

impl<'r, A> Parser<'r, A> {
    /// Create a parser with an empty tree.
    pub fn new(registry: &'r NameRegistry<A>) -> Self {
        Self {
            registry,
            tree: MarkupTree::new(),
            stack: vec![NodeId::ROOT],
        }
    }

    /// Process a single token.
    pub fn process_token(&mut self, token: Token<'_>) {
        match token {
            Token::Text(raw) => self.push_text(raw),
            Token::Tag(tag) if tag.closing => self.close_tag(&tag),
            Token::Tag(tag) => self.open_tag(tag),
        }
    }

    /// Number of open tags, not counting the root.
    pub fn open_depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Return the finished tree.
    pub fn finish(self) -> MarkupTree {
        if self.open_depth() > 0 {
            trace!("markup ended with {} unclosed tag(s)", self.open_depth());
        }
        self.tree
    }

    fn current(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(NodeId::ROOT)
    }

    /// Append resolved text under the current node, unless it is empty.
    fn push_text(&mut self, raw: &str) {
        let text = unescape(raw);
        if !text.is_empty() {
            let parent = self.current();
            self.tree.append(parent, NodeKind::Text(text.into_owned()));
        }
    }

    /// Open a recognized tag; unknown names vanish.
    fn open_tag(&mut self, tag: TagToken) {
        if !self.registry.contains(&tag.name) {
            trace!("dropping unknown tag [{}] at {:?}", tag.name, tag.span);
            return;
        }
        let parent = self.current();
        let id = self.tree.append(parent, NodeKind::Tag(tag.name));
        self.stack.push(id);
    }

    /// Close whatever is innermost, regardless of the closer's name.
    fn close_tag(&mut self, tag: &TagToken) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            trace!("ignoring stray closer [/{}] at {:?}", tag.name, tag.span);
        }
    }
}
