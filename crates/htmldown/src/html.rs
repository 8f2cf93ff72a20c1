//! HTML parsing support.
//!
//! Parses an HTML string with scraper/html5ever and rebuilds it as a
//! [`Dom`], the tree structure the rest of the crate converts. Comments and
//! doctypes are dropped; tag names arrive lowercased by the parser.

use std::rc::Rc;

use scraper::{ElementRef, Html, Node as ScraperNode};

use htmldown_dom::{Dom, NodeId};

/// Parse an HTML string into a document tree.
///
/// # Example
///
/// ```rust
/// use htmldown::{parse_html, HtmldownService};
///
/// let dom = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let service = HtmldownService::new();
/// let markdown = service.convert_dom(&dom).unwrap();
/// assert!(markdown.contains("Hello World"));
/// ```
pub fn parse_html(html: &str) -> Rc<Dom> {
    let document = Html::parse_document(html);
    let dom = Rc::new(Dom::new());
    append_element(&dom, dom.root(), document.root_element());
    dom
}

/// Rebuild a scraper element and its subtree under `parent`.
fn append_element(dom: &Dom, parent: NodeId, element: ElementRef) {
    let attributes: Vec<(&str, &str)> = element.value().attrs().collect();
    let id = dom.create_element(element.value().name(), &attributes);
    dom.append(parent, id);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                let text_id = dom.create_text(text);
                dom.append(id, text_id);
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    append_element(dom, id, child_element);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_html() {
        let dom = parse_html("<p>Hello World</p>");
        let html = dom.children(dom.root());
        assert_eq!(html.len(), 1);
        assert_eq!(dom.node_name(html[0]), "html");
        assert_eq!(dom.text_value(dom.root()), "Hello World");
    }

    #[test]
    fn test_parse_preserves_structure_and_attributes() {
        let dom = parse_html(r#"<p>Hi <a href="https://example.com">there</a></p>"#);
        // html > body > p > [#text, a]
        let html = dom.children(dom.root())[0];
        let body = dom
            .children(html)
            .into_iter()
            .find(|&id| dom.node_name(id) == "body")
            .unwrap();
        let p = dom.children(body)[0];
        assert_eq!(dom.node_name(p), "p");

        let children = dom.children(p);
        assert_eq!(dom.node_name(children[0]), "#text");
        assert_eq!(dom.node_name(children[1]), "a");
        assert_eq!(
            dom.attribute(children[1], "href").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_comments_are_dropped() {
        let dom = parse_html("<p>a<!-- hidden -->b</p>");
        assert_eq!(dom.text_value(dom.root()), "ab");
    }
}
