//! htmldown-dom - mutable DOM tree for HTML to Markdown conversion
//!
//! This crate provides the tree structure that `htmldown` converts. Any HTML
//! parser can populate a [`Dom`]; the conversion crate only relies on the
//! operations defined here.
//!
//! # Architecture
//!
//! ```text
//! HTML String ──parser──▶ ┌─────────┐
//!                         │   Dom   │ ──facade/strategies──▶ Markdown String
//! Hand-built tree ───────▶│ (arena) │
//!                         └─────────┘
//! ```
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Ids are stable:
//! replacing a node detaches it but never removes it from the arena, so a
//! held id stays valid for the lifetime of the tree. This makes id equality
//! a sound node-identity test, which the conversion layer depends on.
//!
//! # Example
//!
//! ```rust
//! use htmldown_dom::Dom;
//!
//! let dom = Dom::new();
//! let p = dom.create_element("p", &[]);
//! dom.append(dom.root(), p);
//! dom.append(p, dom.create_text("Hello World"));
//!
//! assert_eq!(dom.text_value(dom.root()), "Hello World");
//! ```

mod canonical;
mod tree;

pub use canonical::canonicalize;
pub use tree::{Dom, NodeData, NodeId};

/// Error type for tree mutations
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// The operation needs a parent node but the target is the root or
    /// has been detached.
    #[error("node has no parent")]
    MissingParent,
}

pub type Result<T> = std::result::Result<T, DomError>;
