//! Fallback strategy for tags without a registered converter.

use crate::element::Element;
use crate::strategies::ConversionStrategy;
use crate::utilities::trim_text;

/// Passes element content through: block-level tags get their content on its
/// own lines, inline tags contribute their content unchanged. By the time
/// this runs, the content is already the Markdown of the children.
pub struct DefaultStrategy;

impl ConversionStrategy for DefaultStrategy {
    fn supported_tags(&self) -> &[&str] {
        &[]
    }

    fn convert(&self, element: &Element) -> String {
        let value = element.value();
        if element.is_block() {
            format!("\n{}\n", trim_text(&value))
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmldown_dom::Dom;
    use std::rc::Rc;

    fn element_with_text(tag: &str, text: &str) -> Element {
        let dom = Rc::new(Dom::new());
        let node = dom.create_element(tag, &[]);
        dom.append(dom.root(), node);
        dom.append(node, dom.create_text(text));
        Element::new(dom, node)
    }

    #[test]
    fn test_block_content_gets_own_lines() {
        let element = element_with_text("p", "content");
        assert_eq!(DefaultStrategy.convert(&element), "\ncontent\n");
    }

    #[test]
    fn test_block_content_is_trimmed() {
        let element = element_with_text("p", "  padded \n");
        assert_eq!(DefaultStrategy.convert(&element), "\npadded\n");
    }

    #[test]
    fn test_inline_content_passes_through() {
        let element = element_with_text("span", "content");
        assert_eq!(DefaultStrategy.convert(&element), "content");
    }
}
