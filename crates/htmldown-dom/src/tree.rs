//! Arena-backed DOM tree.
//!
//! The tree is addressed through [`NodeId`] handles and mutated through
//! interior mutability, so read-only facades can share ownership of the tree
//! while conversion replaces nodes in place. Single-threaded by design.

use std::cell::RefCell;

use crate::{DomError, Result};

/// Stable handle to a node in a [`Dom`] arena.
///
/// Ids are never reused; two equal ids always refer to the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The payload of a single node.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// The document root (node name `#document`)
    Document,
    /// An element with its tag name exactly as the parser produced it
    Element {
        name: String,
        attributes: Vec<(String, String)>,
    },
    /// A text node (node name `#text`)
    Text { value: String },
}

#[derive(Debug)]
struct RawNode {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A mutable document tree.
///
/// Construction starts from an empty document root; parsers attach elements
/// and text below it with [`Dom::append`]. Conversion replaces nodes through
/// [`Dom::replace_with_text`] without disturbing sibling ids.
#[derive(Debug)]
pub struct Dom {
    nodes: RefCell<Vec<RawNode>>,
}

impl Dom {
    /// Create a tree holding only the document root.
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![RawNode {
                data: NodeData::Document,
                parent: None,
                children: Vec::new(),
            }]),
        }
    }

    /// The document root. Always present, never has a parent.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a detached element node.
    pub fn create_element(&self, name: &str, attributes: &[(&str, &str)]) -> NodeId {
        self.push(NodeData::Element {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })
    }

    /// Create a detached text node.
    pub fn create_text(&self, value: &str) -> NodeId {
        self.push(NodeData::Text {
            value: value.to_string(),
        })
    }

    fn push(&self, data: NodeData) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(RawNode {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Attach `child` as the last child of `parent`.
    pub fn append(&self, parent: NodeId, child: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[child.0].parent = Some(parent);
        nodes[parent.0].children.push(child);
    }

    /// Node name: `#document`, `#text`, or the element tag.
    pub fn node_name(&self, id: NodeId) -> String {
        match &self.nodes.borrow()[id.0].data {
            NodeData::Document => "#document".to_string(),
            NodeData::Element { name, .. } => name.clone(),
            NodeData::Text { .. } => "#text".to_string(),
        }
    }

    /// Text content of a node.
    ///
    /// For a text node this is its value; for element and document nodes it
    /// is the concatenated text of all descendants in document order (DOM
    /// `nodeValue` semantics). Never absent, empty when there is no text.
    pub fn text_value(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let children = {
            let nodes = self.nodes.borrow();
            match &nodes[id.0].data {
                NodeData::Text { value } => {
                    out.push_str(value);
                    return;
                }
                _ => nodes[id.0].children.clone(),
            }
        };
        for child in children {
            self.collect_text(child, out);
        }
    }

    /// Parent of `id`, absent at the root and on detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.borrow()[id.0].parent
    }

    /// Direct children of `id` in source order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[id.0].children.clone()
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        !self.nodes.borrow()[id.0].children.is_empty()
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.borrow()[id.0].children.first().copied()
    }

    /// The sibling immediately after `id` under its parent, if any.
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let parent = nodes[id.0].parent?;
        let siblings = &nodes[parent.0].children;
        let index = siblings.iter().position(|&sibling| sibling == id)?;
        siblings.get(index + 1).copied()
    }

    /// Attribute value by exact name, absent for text/document nodes and
    /// unknown names.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        match &self.nodes.borrow()[id.0].data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone()),
            _ => None,
        }
    }

    /// Replace the node with a fresh text node holding `text`, at the same
    /// position under the same parent. The old node is detached but keeps
    /// its arena slot, so outstanding ids stay valid.
    ///
    /// Fails with [`DomError::MissingParent`] on the root or a node that was
    /// already detached.
    pub fn replace_with_text(&self, id: NodeId, text: &str) -> Result<NodeId> {
        let replacement = self.create_text(text);
        let mut nodes = self.nodes.borrow_mut();
        let parent = nodes[id.0].parent.ok_or(DomError::MissingParent)?;
        let index = nodes[parent.0]
            .children
            .iter()
            .position(|&child| child == id)
            .ok_or(DomError::MissingParent)?;
        nodes[parent.0].children[index] = replacement;
        nodes[replacement.0].parent = Some(parent);
        nodes[id.0].parent = None;
        Ok(replacement)
    }

    /// Snapshot of a node's payload.
    pub fn data(&self, id: NodeId) -> NodeData {
        self.nodes.borrow()[id.0].data.clone()
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Dom, NodeId, NodeId, NodeId) {
        let dom = Dom::new();
        let p = dom.create_element("p", &[("class", "intro")]);
        let a = dom.create_text("A");
        let b = dom.create_element("b", &[]);
        dom.append(dom.root(), p);
        dom.append(p, a);
        dom.append(p, b);
        dom.append(b, dom.create_text("B"));
        (dom, p, a, b)
    }

    #[test]
    fn test_names_and_values() {
        let (dom, p, a, _) = sample();
        assert_eq!(dom.node_name(dom.root()), "#document");
        assert_eq!(dom.node_name(p), "p");
        assert_eq!(dom.node_name(a), "#text");
        assert_eq!(dom.text_value(a), "A");
        assert_eq!(dom.text_value(p), "AB");
        assert_eq!(dom.text_value(dom.root()), "AB");
    }

    #[test]
    fn test_links() {
        let (dom, p, a, b) = sample();
        assert_eq!(dom.parent(p), Some(dom.root()));
        assert_eq!(dom.parent(dom.root()), None);
        assert_eq!(dom.first_child(p), Some(a));
        assert_eq!(dom.next_sibling(a), Some(b));
        assert_eq!(dom.next_sibling(b), None);
        assert_eq!(dom.children(p), vec![a, b]);
        assert!(dom.has_children(p));
        assert!(!dom.has_children(a));
    }

    #[test]
    fn test_attributes() {
        let (dom, p, a, _) = sample();
        assert_eq!(dom.attribute(p, "class").as_deref(), Some("intro"));
        assert_eq!(dom.attribute(p, "id"), None);
        assert_eq!(dom.attribute(a, "class"), None);
    }

    #[test]
    fn test_replace_keeps_position() {
        let (dom, p, a, b) = sample();
        let replacement = dom.replace_with_text(a, "converted").unwrap();
        let children = dom.children(p);
        assert_eq!(children[0], replacement);
        assert_eq!(children[1], b);
        assert_eq!(dom.text_value(p), "convertedB");
        // The old node is detached but still readable.
        assert_eq!(dom.parent(a), None);
        assert_eq!(dom.text_value(a), "A");
    }

    #[test]
    fn test_replace_root_fails() {
        let dom = Dom::new();
        assert!(matches!(
            dom.replace_with_text(dom.root(), "x"),
            Err(DomError::MissingParent)
        ));
    }
}
