//! # htmldown
//!
//! Convert HTML DOM trees to Markdown.
//!
//! The conversion model follows the classic bottom-up design: every node in
//! the tree is visited depth-first, a per-tag [`ConversionStrategy`] turns it
//! into Markdown text, and the result replaces the node in place. By the time
//! a parent is converted, its content is already the Markdown of its
//! children.
//!
//! ## Design
//!
//! - **Parser agnostic**: conversion runs over an [`htmldown_dom::Dom`],
//!   which any parser can populate. The default `html` feature bundles a
//!   scraper-based front-end for HTML strings.
//! - **Pluggable strategies**: each converter declares the tags it claims
//!   through [`ConversionStrategy::supported_tags`], and a registry
//!   dispatches by tag name. Unclaimed tags fall back to a default strategy.
//! - **Facade-based traversal**: strategies see the tree through
//!   [`Element`], which adds block/inline classification, ancestry queries,
//!   document-order iteration, and in-place replacement over the raw tree.
//!
//! ## Example
//!
//! ```rust
//! use htmldown::HtmldownService;
//!
//! let service = HtmldownService::new();
//! let markdown = service.convert_html("<p>Hello <div>World</div></p>").unwrap();
//! assert!(markdown.contains("Hello"));
//! ```

pub mod element;
#[cfg(feature = "html")]
pub mod html;
mod service;
mod strategies;
mod utilities;

pub use element::Element;
#[cfg(feature = "html")]
pub use html::parse_html;
pub use htmldown_dom::{Dom, DomError, NodeId};
pub use service::HtmldownService;
pub use strategies::{ConversionStrategy, DefaultStrategy, StrategyRegistry, TextStrategy};
pub use utilities::*;

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An operation that requires a parent node was invoked on the document
    /// root or a detached node. This is a caller bug, not a recoverable
    /// condition.
    #[error("`{0}` requires a node with a parent")]
    MissingParent(&'static str),

    #[error(transparent)]
    Dom(#[from] DomError),
}

pub type Result<T> = std::result::Result<T, Error>;
