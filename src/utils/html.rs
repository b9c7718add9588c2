// src/utils/html.rs

//! Thin query helpers over `scraper`.
//!
//! Everything here degrades to `None` instead of failing: a selector that
//! does not parse is logged and treated as matching nothing.

use scraper::node::Node;
use scraper::{ElementRef, Selector};

use crate::services::normalize::normalize_whitespace;

/// Elements whose boundaries separate words in rendered text.
const BLOCK_ELEMENTS: [&str; 22] = [
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "footer", "h1",
    "h2", "h3", "h4", "h5", "h6", "header", "li", "main", "p", "section", "td",
];

/// Parse a CSS selector, logging and discarding invalid ones.
pub fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::debug!("Skipping invalid selector '{}': {:?}", css, e);
            None
        }
    }
}

/// Whether a selector string is valid CSS for the HTML parser.
pub fn is_valid_selector(css: &str) -> bool {
    Selector::parse(css).is_ok()
}

/// First element matching `css` within `scope`, in document order.
pub fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    scope.select(&selector).next()
}

/// Every element matching `css` within `scope`, in document order.
pub fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match parse_selector(css) {
        Some(selector) => scope.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// Ancestors of `element`, nearest first, elements only.
pub fn ancestors(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element.ancestors().filter_map(ElementRef::wrap)
}

/// Trimmed, whitespace-collapsed text of an element.
///
/// Block-level boundaries count as whitespace, so `<p>one</p><p>two</p>`
/// reads as "one two" rather than "onetwo".
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Element(el) if BLOCK_ELEMENTS.contains(&el.name()) => text.push(' '),
            Node::Text(t) => {
                let after_block = node
                    .prev_sibling()
                    .and_then(|prev| prev.value().as_element().map(|el| el.name()))
                    .is_some_and(|name| BLOCK_ELEMENTS.contains(&name));
                if after_block {
                    text.push(' ');
                }
                text.push_str(t);
            }
            _ => {}
        }
    }
    normalize_whitespace(&text)
}
