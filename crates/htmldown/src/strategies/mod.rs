//! Conversion strategies and their registry.
//!
//! Each strategy declares the tag names it claims; the registry dispatches
//! by tag and falls back to [`DefaultStrategy`] for everything unclaimed.

mod default;
mod text;

pub use default::DefaultStrategy;
pub use text::TextStrategy;

use std::rc::Rc;

use indexmap::IndexMap;

use crate::element::Element;

/// A pluggable unit of conversion logic, selected by tag identity.
///
/// `convert` is pure: it produces the Markdown replacement for the node but
/// never writes it back — the orchestrator owns the replacement step.
pub trait ConversionStrategy {
    /// Tag identities this strategy claims (e.g. `["#text"]`).
    fn supported_tags(&self) -> &[&str];

    /// Produce the Markdown-safe replacement for `element`.
    fn convert(&self, element: &Element) -> String;
}

/// Tag-keyed strategy dispatch.
pub struct StrategyRegistry {
    by_tag: IndexMap<String, Rc<dyn ConversionStrategy>>,
    fallback: Rc<dyn ConversionStrategy>,
}

impl StrategyRegistry {
    /// A registry with the built-in strategies: text conversion plus the
    /// default fallback.
    pub fn new() -> Self {
        let mut registry = Self {
            by_tag: IndexMap::new(),
            fallback: Rc::new(DefaultStrategy),
        };
        registry.register(Rc::new(TextStrategy));
        registry
    }

    /// Register a strategy under every tag it declares. Later registrations
    /// win over earlier ones for the same tag.
    pub fn register(&mut self, strategy: Rc<dyn ConversionStrategy>) {
        for tag in strategy.supported_tags() {
            self.by_tag.insert((*tag).to_string(), Rc::clone(&strategy));
        }
    }

    /// The strategy claiming `tag`, or the fallback.
    pub fn for_tag(&self, tag: &str) -> &dyn ConversionStrategy {
        self.by_tag
            .get(tag)
            .map(|strategy| strategy.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use htmldown_dom::Dom;

    struct UpperStrategy;

    impl ConversionStrategy for UpperStrategy {
        fn supported_tags(&self) -> &[&str] {
            &["b", "strong"]
        }

        fn convert(&self, element: &Element) -> String {
            element.value().to_uppercase()
        }
    }

    #[test]
    fn test_dispatch_by_tag() {
        let mut registry = StrategyRegistry::new();
        registry.register(Rc::new(UpperStrategy));

        let dom = Rc::new(Dom::new());
        let b = dom.create_element("b", &[]);
        dom.append(dom.root(), b);
        dom.append(b, dom.create_text("loud"));

        let element = Element::new(Rc::clone(&dom), b);
        assert_eq!(registry.for_tag("b").convert(&element), "LOUD");
        assert_eq!(registry.for_tag("strong").convert(&element), "LOUD");
    }

    #[test]
    fn test_unclaimed_tag_falls_back() {
        let registry = StrategyRegistry::new();

        let dom = Rc::new(Dom::new());
        let span = dom.create_element("span", &[]);
        dom.append(dom.root(), span);
        dom.append(span, dom.create_text("plain"));

        let element = Element::new(Rc::clone(&dom), span);
        assert_eq!(registry.for_tag("span").convert(&element), "plain");
    }
}
