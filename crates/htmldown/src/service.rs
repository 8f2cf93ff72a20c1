//! HtmldownService - the main entry point for DOM to Markdown conversion.

use std::rc::Rc;

use htmldown_dom::Dom;

use crate::element::Element;
use crate::strategies::{ConversionStrategy, StrategyRegistry};
use crate::Result;

/// Converts a document tree to Markdown by walking it bottom-up.
///
/// Every node is dispatched to the strategy claiming its tag and replaced in
/// place with the produced Markdown, children before parents, so a parent
/// strategy reads its content as already-converted text. Subtrees inside
/// `pre` and `code` are left untouched; their text keeps exact whitespace.
pub struct HtmldownService {
    strategies: StrategyRegistry,
}

impl HtmldownService {
    /// A service with the built-in strategies.
    pub fn new() -> Self {
        Self {
            strategies: StrategyRegistry::new(),
        }
    }

    /// A service with a caller-assembled registry.
    pub fn with_registry(strategies: StrategyRegistry) -> Self {
        Self { strategies }
    }

    /// Register an additional strategy.
    pub fn add_strategy(&mut self, strategy: Rc<dyn ConversionStrategy>) -> &mut Self {
        self.strategies.register(strategy);
        self
    }

    /// Convert a document tree to Markdown. The tree is consumed in the
    /// sense that conversion rewrites it in place.
    pub fn convert_dom(&self, dom: &Rc<Dom>) -> Result<String> {
        let root = Element::new(Rc::clone(dom), dom.root());
        for child in root.children() {
            self.convert_node(&child)?;
        }
        Ok(post_process(&dom.text_value(dom.root())))
    }

    /// Parse an HTML string and convert it.
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<String> {
        let dom = crate::html::parse_html(html);
        self.convert_dom(&dom)
    }

    fn convert_node(&self, element: &Element) -> Result<()> {
        // Text inside pre/code keeps its exact whitespace.
        if element.is_descendant_of(&["pre", "code"]) {
            return Ok(());
        }

        for child in element.children() {
            self.convert_node(&child)?;
        }

        let strategy = self.strategies.for_tag(&element.tag_name());
        let markdown = strategy.convert(element);
        element.set_final_markdown(&markdown)
    }
}

impl Default for HtmldownService {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim outer newlines and cap blank-line runs at one.
fn post_process(output: &str) -> String {
    let result = output.trim_matches('\n');

    let mut newline_count = 0;
    let mut processed = String::with_capacity(result.len());

    for c in result.chars() {
        if c == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                processed.push(c);
            }
        } else {
            newline_count = 0;
            processed.push(c);
        }
    }

    processed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_paragraph() {
        let dom = Rc::new(Dom::new());
        let p = dom.create_element("p", &[]);
        dom.append(dom.root(), p);
        dom.append(p, dom.create_text("Hello World"));

        let service = HtmldownService::new();
        assert_eq!(service.convert_dom(&dom).unwrap(), "Hello World");
    }

    #[test]
    fn test_text_is_escaped_bottom_up() {
        let dom = Rc::new(Dom::new());
        let p = dom.create_element("p", &[]);
        dom.append(dom.root(), p);
        dom.append(p, dom.create_text("  Hello_World  "));

        let service = HtmldownService::new();
        assert_eq!(service.convert_dom(&dom).unwrap(), r"Hello\_World");
    }

    #[test]
    fn test_space_between_blocks_is_dropped() {
        let dom = Rc::new(Dom::new());
        let first = dom.create_element("p", &[]);
        let space = dom.create_text(" ");
        let second = dom.create_element("p", &[]);
        dom.append(dom.root(), first);
        dom.append(first, dom.create_text("a"));
        dom.append(dom.root(), space);
        dom.append(dom.root(), second);
        dom.append(second, dom.create_text("b"));

        let service = HtmldownService::new();
        assert_eq!(service.convert_dom(&dom).unwrap(), "a\n\nb");
    }

    #[test]
    fn test_pre_content_keeps_whitespace() {
        let dom = Rc::new(Dom::new());
        let pre = dom.create_element("pre", &[]);
        dom.append(dom.root(), pre);
        dom.append(pre, dom.create_text("fn main() {\n    body\n}"));

        let service = HtmldownService::new();
        assert_eq!(
            service.convert_dom(&dom).unwrap(),
            "fn main() {\n    body\n}"
        );
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_convert_html_string() {
        let service = HtmldownService::new();
        let result = service
            .convert_html("<p>Hello <strong>World</strong></p>")
            .unwrap();
        assert_eq!(result, "Hello World");
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_convert_html_escapes_metacharacters() {
        let service = HtmldownService::new();
        let result = service.convert_html("<p>snake_case [link]</p>").unwrap();
        assert_eq!(result, r"snake\_case \[link\]");
    }

    #[cfg(feature = "html")]
    #[test]
    fn test_div_content_is_not_escaped() {
        let service = HtmldownService::new();
        let result = service.convert_html("<div>snake_case</div>").unwrap();
        assert_eq!(result, "snake_case");
    }
}
