//! Nodes of a parsed markup tree.
//!
//! Nodes live in an arena owned by [`MarkupTree`]. Ownership runs from a
//! parent to its ordered children; the parent link is a plain [`NodeId`] and
//! never keeps anything alive.

use std::fmt;

use crate::markup::MarkupTree;

/// Index of a node inside its [`MarkupTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The document root. Every tree has one.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena (document order).
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a node holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root: a container with no tag and no content.
    Root,
    /// Literal display text. Never empty once inserted.
    Text(String),
    /// A recognized tag, always lowercase.
    Tag(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
        }
    }
}

/// A borrowed view of one node and its surroundings.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a MarkupTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a MarkupTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn node(&self) -> &'a Node {
        self.tree.node(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> &'a NodeKind {
        &self.node().kind
    }

    /// The tag name, for tag nodes.
    pub fn tag(&self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// The literal text, for text nodes.
    pub fn content(&self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind(), NodeKind::Text(_))
    }

    pub fn is_tag(&self) -> bool {
        matches!(self.kind(), NodeKind::Tag(_))
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind(), NodeKind::Root)
    }

    /// The enclosing node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }

    /// Children in document order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeRef<'a>> + use<'a> {
        let tree = self.tree;
        self.node()
            .children
            .iter()
            .map(move |&id| NodeRef::new(tree, id))
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        self.node()
            .children
            .get(index)
            .map(|&id| NodeRef::new(self.tree, id))
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    /// Number of ancestors; zero for the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node().parent;
        while let Some(id) = current {
            depth += 1;
            current = self.tree.node(id).parent;
        }
        depth
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", self.kind())
            .field("children", &self.child_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MarkupTree {
        let mut tree = MarkupTree::new();
        let red = tree.append(NodeId::ROOT, NodeKind::Tag("red".into()));
        tree.append(red, NodeKind::Text("hi".into()));
        tree
    }

    #[test]
    fn root_has_no_parent() {
        let tree = sample();
        let root = tree.root();
        assert!(root.is_root());
        assert!(root.parent().is_none());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.tag(), None);
        assert_eq!(root.content(), None);
    }

    #[test]
    fn parent_links_back() {
        let tree = sample();
        let red = tree.root().child(0).unwrap();
        let text = red.child(0).unwrap();
        assert_eq!(text.parent().unwrap().id(), red.id());
        assert_eq!(red.parent().unwrap().id(), NodeId::ROOT);
        assert_eq!(text.depth(), 2);
    }

    #[test]
    fn accessors_follow_kind() {
        let tree = sample();
        let red = tree.root().child(0).unwrap();
        assert!(red.is_tag());
        assert_eq!(red.tag(), Some("red"));
        let text = red.child(0).unwrap();
        assert!(text.is_text());
        assert_eq!(text.content(), Some("hi"));
        assert_eq!(text.child_count(), 0);
        assert!(red.child(1).is_none());
    }
}
