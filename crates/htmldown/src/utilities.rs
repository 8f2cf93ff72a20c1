//! Utility functions and constants shared by the facade and strategies.

/// Tags whose content occupies its own line(s) in Markdown output.
///
/// Closed set, matched exactly and case-sensitively against the tag name as
/// the parser produced it. Everything else, `#text` included, is inline.
pub const BLOCK_TAGS: &[&str] = &[
    "blockquote", "body", "code", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
    "html", "li", "p", "ol", "ul",
];

/// Check if a tag is block-level.
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

/// Trim the source's whitespace set from both ends of a string.
///
/// This is the ASCII-style set (space, tab, newline, carriage return, NUL,
/// vertical tab), not full Unicode whitespace.
pub fn trim_text(value: &str) -> &str {
    value.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0b'))
}

/// Entity-encode text for safe embedding: `&`, `<` and `>` only, quote
/// characters left alone.
pub fn encode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
