//! Per-site word-of-the-day scrapers.
//!
//! Each built-in site is described by a static [`SiteProfile`]: ordered
//! headword strategies followed by ordered definition strategies. The
//! archive site and user-supplied pages need bespoke logic and get their own
//! variants. All of them share one contract: [`SiteScraper::scrape`] returns
//! `None` rather than failing when the markup does not cooperate.

mod custom;
mod dictionary_com;
mod merriam_webster;
mod wordhord;
mod wordsmith;

use scraper::{ElementRef, Html};

use crate::models::{SourceConfig, SourceKind, WordResult};
use crate::services::candidates::{
    Candidate, accept, find_any_valid, find_first_valid, find_first_valid_token,
    find_first_valid_where,
};
use crate::services::normalize::{
    DEFAULT_DEFINITION_LEN, MIN_WORD_LENGTH, extract_word, truncate_definition,
};
use crate::utils::html::{ancestors, element_text, select_first};

pub use custom::CustomScraper;
pub use dictionary_com::DICTIONARY_COM;
pub use merriam_webster::MERRIAM_WEBSTER;
pub use wordhord::{WORDHORD_ENDPOINT, WORDHORD_NAME};
pub use wordsmith::WORDSMITH;

/// Social-card title tags, used when the page body gives nothing away.
const META_TITLE: &str = "meta[property='og:title'], meta[name='twitter:title']";

/// A scraper for one source.
#[derive(Debug, Clone)]
pub enum SiteScraper {
    /// A built-in site driven by selector chains
    Profile(&'static SiteProfile),
    /// Old English Wordhord archive posts
    Wordhord,
    /// A user-supplied page
    Custom(CustomScraper),
}

impl SiteScraper {
    /// The scraper matching a source configuration.
    pub fn for_source(source: &SourceConfig) -> Self {
        match source.kind {
            SourceKind::MerriamWebster => SiteScraper::Profile(&MERRIAM_WEBSTER),
            SourceKind::DictionaryCom => SiteScraper::Profile(&DICTIONARY_COM),
            SourceKind::Wordsmith => SiteScraper::Profile(&WORDSMITH),
            SourceKind::OldEnglishWordhord => SiteScraper::Wordhord,
            SourceKind::Custom => SiteScraper::Custom(CustomScraper::new(source.selector.clone())),
        }
    }

    /// Site name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            SiteScraper::Profile(profile) => profile.name,
            SiteScraper::Wordhord => WORDHORD_NAME,
            SiteScraper::Custom(_) => SourceKind::Custom.name(),
        }
    }

    /// Fixed endpoint of a built-in site; `None` for custom pages.
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            SiteScraper::Profile(profile) => Some(profile.endpoint),
            SiteScraper::Wordhord => Some(WORDHORD_ENDPOINT),
            SiteScraper::Custom(_) => None,
        }
    }

    /// Extract the word (and a definition when one is found).
    pub fn scrape(&self, document: &Html) -> Option<WordResult> {
        let result = match self {
            SiteScraper::Profile(profile) => profile.scrape(document),
            SiteScraper::Wordhord => wordhord::scrape(document),
            SiteScraper::Custom(custom) => custom.scrape(document),
        };
        match &result {
            Some(found) => log::debug!("{}: found '{}'", self.name(), found.word()),
            None => log::debug!("{}: no headword matched", self.name()),
        }
        result
    }
}

/// How the metadata fallback reads a social-card title.
#[derive(Debug, Clone, Copy)]
pub enum MetaTitle {
    /// Take the segment after the last `:`; titles without one are ignored
    TrailingSegment,
    /// Extract from the whole title
    Whole,
}

/// One way of locating the headword.
#[derive(Debug)]
pub enum HeadwordStrategy {
    /// First match of each selector, run through the heading heuristics
    Chain(&'static [&'static str]),
    /// As `Chain`, skipping elements whose text is boilerplate
    Filtered(&'static [&'static str], fn(&str) -> bool),
    /// As `Filtered`, taking the first token that validates by itself
    TokenScan(&'static [&'static str], fn(&str) -> bool),
    /// Every match of one selector, in document order
    EveryMatch(&'static str),
    /// `og:title` / `twitter:title` content
    Meta(MetaTitle),
}

impl HeadwordStrategy {
    fn locate<'a>(&self, root: ElementRef<'a>) -> Option<Candidate<'a>> {
        match self {
            HeadwordStrategy::Chain(chain) => find_first_valid(root, chain, MIN_WORD_LENGTH),
            HeadwordStrategy::Filtered(chain, skip) => {
                find_first_valid_where(root, chain, MIN_WORD_LENGTH, skip)
            }
            HeadwordStrategy::TokenScan(chain, skip) => {
                find_first_valid_token(root, chain, MIN_WORD_LENGTH, skip)
            }
            HeadwordStrategy::EveryMatch(css) => find_any_valid(root, css, MIN_WORD_LENGTH),
            HeadwordStrategy::Meta(mode) => meta_title(root, *mode),
        }
    }
}

/// One way of locating a definition once the headword is known.
#[derive(Debug)]
pub enum DefinitionStrategy {
    /// First match of each selector anywhere in the document
    Chain(&'static [&'static str]),
    /// First match of `selector` under the headword's nearest ancestors
    Nearby {
        selector: &'static str,
        /// How many ancestors to climb (1 = parent only)
        levels: usize,
        /// Reject text that repeats the headword
        reject_headword: bool,
    },
}

impl DefinitionStrategy {
    fn locate(&self, root: ElementRef<'_>, headword: &Candidate<'_>) -> Option<String> {
        match self {
            DefinitionStrategy::Chain(chain) => chain.iter().find_map(|css| {
                let element = select_first(root, css)?;
                truncate_definition(&element_text(element), DEFAULT_DEFINITION_LEN)
            }),
            DefinitionStrategy::Nearby {
                selector,
                levels,
                reject_headword,
            } => {
                let found = ancestors(headword.element)
                    .take(*levels)
                    .find_map(|ancestor| select_first(ancestor, selector))?;
                let text = element_text(found);
                if *reject_headword
                    && text
                        .to_lowercase()
                        .contains(&headword.word.to_lowercase())
                {
                    return None;
                }
                truncate_definition(&text, DEFAULT_DEFINITION_LEN)
            }
        }
    }
}

/// Static description of a built-in site.
#[derive(Debug)]
pub struct SiteProfile {
    pub name: &'static str,
    pub endpoint: &'static str,
    headword: &'static [HeadwordStrategy],
    definition: &'static [DefinitionStrategy],
}

impl SiteProfile {
    /// Run the headword strategies in order, then look for a definition.
    pub fn scrape(&self, document: &Html) -> Option<WordResult> {
        let root = document.root_element();
        let headword = self
            .headword
            .iter()
            .find_map(|strategy| strategy.locate(root))?;
        let definition = self
            .definition
            .iter()
            .find_map(|strategy| strategy.locate(root, &headword));
        Some(WordResult::new(headword.word, definition))
    }
}

fn meta_title(root: ElementRef<'_>, mode: MetaTitle) -> Option<Candidate<'_>> {
    let element = select_first(root, META_TITLE)?;
    let content = element.value().attr("content")?.trim();
    if content.is_empty() {
        return None;
    }

    let source = match mode {
        MetaTitle::Whole => content,
        MetaTitle::TrailingSegment => {
            let mut parts: Vec<&str> = content.split(':').collect();
            while parts.last().is_some_and(|p| p.is_empty()) {
                parts.pop();
            }
            if parts.len() < 2 {
                return None;
            }
            let last: &str = *parts.last()?;
            last.trim()
        }
    };

    let word = extract_word(source)?;
    accept(&word, MIN_WORD_LENGTH).then_some(Candidate { word, element })
}
