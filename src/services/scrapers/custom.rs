//! User-supplied page with an optional selector override.

use scraper::Html;

use crate::models::WordResult;
use crate::services::candidates::{Candidate, find_first_valid};
use crate::services::normalize::{DEFAULT_DEFINITION_LEN, MIN_WORD_LENGTH, truncate_definition};
use crate::utils::html::{ancestors, element_text, is_valid_selector, select_first};

/// Selectors tried when no override is configured or it finds nothing.
const GENERIC_WORD: &str = "h1, h2, .word, .wotd, [class*=word]";

/// Where a definition may sit next to the overridden element.
const NEARBY_DEFINITION: &str = "p, .definition, .def";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomScraper {
    selector: Option<String>,
}

impl CustomScraper {
    pub fn new(selector: Option<String>) -> Self {
        let selector = selector
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self { selector }
    }

    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    pub fn scrape(&self, document: &Html) -> Option<WordResult> {
        let root = document.root_element();

        if let Some(css) = self.usable_selector() {
            if let Some(Candidate { word, element }) =
                find_first_valid(root, &[css], MIN_WORD_LENGTH)
            {
                let definition = ancestors(element)
                    .next()
                    .and_then(|parent| select_first(parent, NEARBY_DEFINITION))
                    .and_then(|el| truncate_definition(&element_text(el), DEFAULT_DEFINITION_LEN));
                return Some(WordResult::new(word, definition));
            }
            log::debug!("Custom selector '{}' found no word, trying generic headings", css);
        }

        // Only the first generic match is considered
        find_first_valid(root, &[GENERIC_WORD], MIN_WORD_LENGTH)
            .map(|candidate| WordResult::new(candidate.word, None))
    }

    fn usable_selector(&self) -> Option<&str> {
        let css = self.selector.as_deref()?;
        if is_valid_selector(css) {
            Some(css)
        } else {
            log::warn!("Ignoring invalid custom selector '{}'", css);
            None
        }
    }
}
