//! Canonical subtree serialization.
//!
//! Produces the canonicalized XML-like form of a subtree, following C14N
//! conventions: attributes sorted by name, entity-escaped text and attribute
//! values, never self-closing. Structural converters use this to re-emit
//! markup they cannot express in Markdown.

use crate::tree::{Dom, NodeData, NodeId};

/// Serialize the subtree rooted at `id`.
///
/// Elements serialize including their own tags; the document root serializes
/// as the concatenation of its children.
pub fn canonicalize(dom: &Dom, id: NodeId) -> String {
    let mut out = String::new();
    write_node(dom, id, &mut out);
    out
}

fn write_node(dom: &Dom, id: NodeId, out: &mut String) {
    match dom.data(id) {
        NodeData::Document => {
            for child in dom.children(id) {
                write_node(dom, child, out);
            }
        }
        NodeData::Element {
            name,
            mut attributes,
        } => {
            attributes.sort_by(|(a, _), (b, _)| a.cmp(b));
            out.push('<');
            out.push_str(&name);
            for (key, value) in &attributes {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(&escape_attribute(value));
                out.push('"');
            }
            out.push('>');
            for child in dom.children(id) {
                write_node(dom, child, out);
            }
            out.push_str("</");
            out.push_str(&name);
            out.push('>');
        }
        NodeData::Text { value } => out.push_str(&escape_text(&value)),
    }
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
