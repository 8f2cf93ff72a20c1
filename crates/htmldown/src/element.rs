//! Element facade over a DOM node.
//!
//! Strategies never touch the tree directly; they see each node through an
//! [`Element`], which layers traversal and classification over the raw
//! parent/child/sibling links. Facades are minted on demand — every parent,
//! child or successor lookup constructs a fresh one — so identity is defined
//! by the wrapped node (arena + id), never by facade instance.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use htmldown_dom::{canonicalize, Dom, NodeId};

use crate::utilities::{is_block_tag, trim_text};
use crate::{Error, Result};

/// A traversal facade wrapping exactly one node of a [`Dom`].
#[derive(Debug, Clone)]
pub struct Element {
    dom: Rc<Dom>,
    id: NodeId,
    /// Memoized document-order successor. Per facade instance: two facades
    /// over the same node do not share this cache.
    next: OnceCell<Option<NodeId>>,
}

impl Element {
    /// Wrap a node of `dom`.
    pub fn new(dom: Rc<Dom>, id: NodeId) -> Self {
        Self {
            dom,
            id,
            next: OnceCell::new(),
        }
    }

    /// The wrapped node's id. Stable identity key for the facade.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// True iff the tag is in the fixed block-level set.
    pub fn is_block(&self) -> bool {
        is_block_tag(&self.tag_name())
    }

    /// True iff the node is a text node.
    pub fn is_text(&self) -> bool {
        self.tag_name() == "#text"
    }

    /// True iff the node is a text node whose value trims to empty.
    pub fn is_whitespace(&self) -> bool {
        self.is_text() && trim_text(&self.value()).is_empty()
    }

    pub fn tag_name(&self) -> String {
        self.dom.node_name(self.id)
    }

    /// Raw text content: the node's own value for text nodes, the
    /// concatenated descendant text otherwise. Empty string when there is
    /// none, never absent.
    pub fn value(&self) -> String {
        self.dom.text_value(self.id)
    }

    /// The immediate parent, absent only when the underlying node has no
    /// parent link (the document root, or a node detached by replacement).
    pub fn parent(&self) -> Option<Element> {
        self.dom
            .parent(self.id)
            .map(|id| Element::new(Rc::clone(&self.dom), id))
    }

    pub fn has_children(&self) -> bool {
        self.dom.has_children(self.id)
    }

    /// One facade per direct child, in source order.
    pub fn children(&self) -> Vec<Element> {
        self.dom
            .children(self.id)
            .into_iter()
            .map(|id| Element::new(Rc::clone(&self.dom), id))
            .collect()
    }

    /// The next node in document order: first child, else next sibling,
    /// else the nearest ancestor's next sibling. Absent once the walk runs
    /// past the end of the document.
    ///
    /// The result is memoized on first computation, absent results included.
    pub fn next(&self) -> Option<Element> {
        let next = *self.next.get_or_init(|| self.next_in_document_order());
        next.map(|id| Element::new(Rc::clone(&self.dom), id))
    }

    fn next_in_document_order(&self) -> Option<NodeId> {
        if let Some(child) = self.dom.first_child(self.id) {
            return Some(child);
        }
        // Hunt for a next sibling up the ancestor chain, never re-descending.
        let mut current = self.id;
        loop {
            if let Some(sibling) = self.dom.next_sibling(current) {
                return Some(sibling);
            }
            current = self.dom.parent(current)?;
        }
    }

    /// Walk parent links upward (excluding this node) looking for any of the
    /// given tag names.
    pub fn is_descendant_of(&self, tag_names: &[&str]) -> bool {
        let mut current = self.dom.parent(self.id);
        while let Some(id) = current {
            if tag_names.contains(&self.dom.node_name(id).as_str()) {
                return true;
            }
            current = self.dom.parent(id);
        }
        false
    }

    /// Replace the wrapped node with a text node holding `markdown`.
    ///
    /// One-shot and destructive; the node must have a parent.
    pub fn set_final_markdown(&self, markdown: &str) -> Result<()> {
        self.dom.replace_with_text(self.id, markdown)?;
        Ok(())
    }

    /// Canonical XML-like serialization of the wrapped node's subtree.
    pub fn children_as_string(&self) -> String {
        canonicalize(&self.dom, self.id)
    }

    /// 1-based rank of this element among the parent's non-whitespace
    /// children. Whitespace-only text siblings are scanned but never
    /// counted; the scan stops once it reaches this element by id.
    ///
    /// Requires a parent.
    pub fn sibling_position(&self) -> Result<usize> {
        let parent = self
            .parent()
            .ok_or(Error::MissingParent("sibling_position"))?;
        let mut position = 0;
        for sibling in parent.children() {
            if !sibling.is_whitespace() {
                position += 1;
            }
            if sibling.id == self.id {
                break;
            }
        }
        Ok(position)
    }

    /// Attribute value by name; empty string when the node has no such
    /// attribute or cannot carry attributes at all. Never an error.
    pub fn attribute(&self, name: &str) -> String {
        self.dom.attribute(self.id, name).unwrap_or_default()
    }
}

/// Equality is wrapped-node identity: same arena, same node id. Two facades
/// minted separately over one node compare equal.
impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dom, &other.dom) && self.id == other.id
    }
}

impl Eq for Element {}
