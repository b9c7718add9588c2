//! Selector-chain candidate search.
//!
//! Every scraper follows the same pattern: try an ordered list of selectors,
//! extract a word from the first match of each, validate it, and stop at the
//! first one that passes.

use scraper::ElementRef;

use crate::services::normalize::{extract_word, first_valid_token, is_valid_word};
use crate::utils::html::{element_text, select_all, select_first};

/// An accepted headword and the element it came from.
///
/// The element anchors the search for a nearby definition.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub word: String,
    pub element: ElementRef<'a>,
}

/// Whether an extracted word passes validation and the length floor.
pub fn accept(word: &str, min_length: usize) -> bool {
    is_valid_word(word) && word.len() >= min_length
}

/// First selector in `chain` whose first match yields a valid word.
pub fn find_first_valid<'a>(
    scope: ElementRef<'a>,
    chain: &[&str],
    min_length: usize,
) -> Option<Candidate<'a>> {
    find_first_valid_where(scope, chain, min_length, |_| false)
}

/// Like [`find_first_valid`], skipping elements whose text is boilerplate.
pub fn find_first_valid_where<'a>(
    scope: ElementRef<'a>,
    chain: &[&str],
    min_length: usize,
    is_boilerplate: impl Fn(&str) -> bool,
) -> Option<Candidate<'a>> {
    chain.iter().find_map(|css| {
        let element = select_first(scope, css)?;
        let text = element_text(element);
        if is_boilerplate(&text) {
            log::debug!("Skipping boilerplate match for '{}': {}", css, text);
            return None;
        }
        let word = extract_word(&text)?;
        accept(&word, min_length).then_some(Candidate { word, element })
    })
}

/// Like [`find_first_valid_where`], but takes the first token of the
/// element's text that validates on its own instead of running the
/// heading heuristics.
pub fn find_first_valid_token<'a>(
    scope: ElementRef<'a>,
    chain: &[&str],
    min_length: usize,
    is_boilerplate: impl Fn(&str) -> bool,
) -> Option<Candidate<'a>> {
    chain.iter().find_map(|css| {
        let element = select_first(scope, css)?;
        let text = element_text(element);
        if is_boilerplate(&text) {
            return None;
        }
        let word = first_valid_token(&text, min_length)?;
        Some(Candidate { word, element })
    })
}

/// First of *all* matches of `css` that yields a valid word.
pub fn find_any_valid<'a>(
    scope: ElementRef<'a>,
    css: &str,
    min_length: usize,
) -> Option<Candidate<'a>> {
    select_all(scope, css).into_iter().find_map(|element| {
        let word = extract_word(&element_text(element))?;
        accept(&word, min_length).then_some(Candidate { word, element })
    })
}
