//! Text node conversion.
//!
//! Turns the raw value of a `#text` node into Markdown-safe text: whitespace
//! collapsing, metacharacter escaping, suppression of a lone space at block
//! boundaries, then entity encoding. The steps run in a fixed order; each
//! feeds the next.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::element::Element;
use crate::strategies::ConversionStrategy;
use crate::utilities::encode_entities;

/// Any maximal run of Unicode whitespace.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Markdown metacharacters that need a backslash prefix.
static MARKDOWN_META: Lazy<Regex> = Lazy::new(|| Regex::new(r"([*_\[\]\\])").unwrap());

/// Strategy for `#text` nodes.
pub struct TextStrategy;

impl ConversionStrategy for TextStrategy {
    fn supported_tags(&self) -> &[&str] {
        &["#text"]
    }

    fn convert(&self, element: &Element) -> String {
        let value = element.value();

        // Leftover newlines at the start of the line, not arbitrary whitespace.
        let stripped = value.trim_start_matches('\n');

        let mut markdown = WHITESPACE_RUN.replace_all(stripped, " ").into_owned();

        // Content directly inside a div is treated as already safe.
        if let Some(parent) = element.parent() {
            if parent.tag_name() != "div" {
                markdown = MARKDOWN_META.replace_all(&markdown, r"\$1").into_owned();
            }
        }

        // A stray hash at the start would read as a heading.
        if markdown.starts_with('#') {
            markdown.insert(0, '\\');
        }

        if markdown == " " {
            let keeps_meaning = element.next().is_some_and(|next| !next.is_block());
            if !keeps_meaning {
                markdown.clear();
            }
        }

        encode_entities(&markdown)
    }
}
