//! Arena-backed document tree consumed by the style engine.
//!
//! Nodes live in an `indextree` arena and are addressed by `NodeId`
//! handles, which double as style-table keys. The style engine treats the
//! tree as read-only through the [`ElementAdapter`] implementation; it
//! never mutates tags, attributes, or child lists.

#![forbid(unsafe_code)]

use std::collections::HashMap;

use css_selectors::ElementAdapter;
use indextree::Arena;

pub use indextree::NodeId;

/// One node: an element with tag and attributes, or a run of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    /// An element node.
    Element {
        /// Lowercased tag name.
        tag: String,
        /// Attribute map, including optional `style`, `class`, and `id`.
        attributes: HashMap<String, String>,
    },
    /// A text node.
    Text(String),
}

/// A document tree with a single root element.
#[derive(Debug)]
pub struct Document {
    /// Node storage.
    arena: Arena<NodeData>,
    /// The root element.
    root: NodeId,
}

impl Document {
    /// Create a document whose root is an element with the given tag and
    /// attributes. Tags are case-folded to lowercase on insertion.
    pub fn new(tag: &str, attributes: &[(&str, &str)]) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(element_data(tag, attributes));
        Self { arena, root }
    }

    /// The root element's handle.
    #[inline]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Append a child element under `parent` and return its handle.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: &[(&str, &str)],
    ) -> NodeId {
        let child = self.arena.new_node(element_data(tag, attributes));
        parent.append(child, &mut self.arena);
        child
    }

    /// Append a text child under `parent` and return its handle.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let child = self.arena.new_node(NodeData::Text(text.to_owned()));
        parent.append(child, &mut self.arena);
        child
    }

    /// The node's data, if the handle is valid.
    #[inline]
    pub fn data(&self, node: NodeId) -> Option<&NodeData> {
        self.arena.get(node).map(indextree::Node::get)
    }

    /// Text content for text nodes, `None` otherwise.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match self.data(node) {
            Some(NodeData::Text(content)) => Some(content.as_str()),
            _ => None,
        }
    }

    /// Number of nodes in the document.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.count()
    }

    /// Whether the document holds no nodes (never true: there is always a
    /// root).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

impl ElementAdapter for Document {
    type Handle = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node).and_then(indextree::Node::parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        node.children(&self.arena).collect()
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        match self.data(node) {
            Some(NodeData::Element { tag, .. }) => Some(tag.as_str()),
            _ => None,
        }
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        match self.data(node) {
            Some(NodeData::Element { attributes, .. }) => {
                attributes.get(name).map(String::as_str)
            }
            _ => None,
        }
    }
}

fn element_data(tag: &str, attributes: &[(&str, &str)]) -> NodeData {
    NodeData::Element {
        tag: tag.to_ascii_lowercase(),
        attributes: attributes
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect(),
    }
}
