//! MarkupTree result type.
//!
//! This is the result of parsing color markup text.

use std::fmt;

use crate::node::{Node, NodeId, NodeKind, NodeRef};
use crate::parser::escape;
use crate::registry::NameRegistry;

/// The result of parsing color markup.
///
/// An arena of nodes in document order. Index 0 is the root; every other
/// node appears after its parent and after all earlier siblings' subtrees,
/// so the arena order is also the pre-order traversal order.
///
/// # Examples
///
/// ```
/// use markup::MarkupTree;
///
/// let tree = MarkupTree::parse("[red]Hello[/red] World");
/// assert_eq!(tree.plain_text(), "Hello World");
/// assert_eq!(tree.root().child_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupTree {
    nodes: Vec<Node>,
}

impl Default for MarkupTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupTree {
    /// Create a tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root, None)],
        }
    }

    /// Parse markup with the sixteen console color names.
    pub fn parse(input: &str) -> Self {
        crate::parser::parse(input)
    }

    /// Parse markup, recognizing the names in `registry`.
    pub fn parse_with<A>(input: &str, registry: &NameRegistry<A>) -> Self {
        crate::parser::parse_with(input, registry)
    }

    /// Append a node as the last child of `parent`.
    pub(crate) fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    /// Depth of the deepest node; zero for an empty tree.
    pub fn max_depth(&self) -> usize {
        let mut depths = vec![0usize; self.nodes.len()];
        let mut max = 0;
        for (index, node) in self.nodes.iter().enumerate().skip(1) {
            let depth = node.parent.map_or(0, |parent| depths[parent.0]) + 1;
            depths[index] = depth;
            max = max.max(depth);
        }
        max
    }

    /// Every node except the root, in pre-order.
    pub fn descendants(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.walk().filter_map(|event| match event {
            WalkEvent::Enter(node) => Some(node),
            WalkEvent::Leave(_) => None,
        })
    }

    /// Depth-first traversal reporting when each node is entered and left.
    ///
    /// The root itself is not reported. Text nodes are entered and left
    /// immediately.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(NodeId::ROOT, 0)],
        }
    }

    /// The displayed text with all markup removed.
    pub fn plain_text(&self) -> String {
        self.descendants().filter_map(|node| node.content()).collect()
    }

    /// Serialize back to markup.
    ///
    /// Every tag is written with an explicit closer and literal brackets in
    /// text are escaped, so parsing the result yields an equal tree as long
    /// as no two text nodes are adjacent siblings.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for event in self.walk() {
            match event {
                WalkEvent::Enter(node) => match node.kind() {
                    NodeKind::Text(text) => out.push_str(&escape(text)),
                    NodeKind::Tag(tag) => {
                        out.push('[');
                        out.push_str(tag);
                        out.push(']');
                    }
                    NodeKind::Root => {}
                },
                WalkEvent::Leave(node) => {
                    if let Some(tag) = node.tag() {
                        out.push_str("[/");
                        out.push_str(tag);
                        out.push(']');
                    }
                }
            }
        }
        out
    }

    /// An indented listing of the tree, one node per line.
    ///
    /// Tags print as `[name]` and text as a quoted string.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let mut depth = 0;
        for event in self.walk() {
            match event {
                WalkEvent::Enter(node) => {
                    for _ in 0..depth {
                        out.push_str("  ");
                    }
                    match node.kind() {
                        NodeKind::Text(text) => out.push_str(&format!("{:?}\n", text)),
                        NodeKind::Tag(tag) => out.push_str(&format!("[{}]\n", tag)),
                        NodeKind::Root => {}
                    }
                    depth += 1;
                }
                WalkEvent::Leave(_) => depth -= 1,
            }
        }
        out
    }
}

impl fmt::Display for MarkupTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

/// A step of [`MarkupTree::walk`].
#[derive(Clone, Copy, Debug)]
pub enum WalkEvent<'a> {
    Enter(NodeRef<'a>),
    Leave(NodeRef<'a>),
}

/// Iterator over walk events.
///
/// Keeps its own stack, so arbitrarily deep nesting does not recurse.
pub struct Walk<'a> {
    tree: &'a MarkupTree,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            let id = top.0;
            let children = &self.tree.node(id).children;

            if let Some(&child) = children.get(top.1) {
                top.1 += 1;
                self.stack.push((child, 0));
                return Some(WalkEvent::Enter(NodeRef::new(self.tree, child)));
            }

            self.stack.pop();
            if id != NodeId::ROOT {
                return Some(WalkEvent::Leave(NodeRef::new(self.tree, id)));
            }
        }
    }
}
