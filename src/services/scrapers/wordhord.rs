//! Old English Wordhord.
//!
//! The front page is a blog; the newest post is the word of the day. Posts
//! open with a line shaped like `hwæt, interjection: listen. (/hwæt/)`.

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::models::WordResult;
use crate::services::normalize::{
    DEFAULT_DEFINITION_LEN, cap_definition, clean_archive_word, strip_pronunciation,
};
use crate::utils::html::{element_text, select_all, select_first};

pub const WORDHORD_NAME: &str = "Old English Wordhord";
pub const WORDHORD_ENDPOINT: &str = "https://oldenglishwordhord.com/";

const POST: &str = "article.post, article, .entry, .post, .word-entry";
const LOOSE_POST: &str = "[class*='post'], [class*='entry']";
const POST_TITLE: &str = "h1, h2, .entry-title, .post-title";
const MAIN_CONTENT: &str = "main, .main-content, #content, #main";

/// Headings in the main area that name the site rather than a word.
const SITE_HEADINGS: [&str; 4] = ["old english", "wordhord", "navigation", "word of the day"];

pub(super) fn scrape(document: &Html) -> Option<WordResult> {
    let root = document.root_element();
    let post = select_first(root, POST).or_else(|| select_first(root, LOOSE_POST));

    let from_post = post.and_then(|post| {
        let word = post_headword(post)?;
        let definition = post_definition(post, &word)
            .map(|definition| cap_definition(&definition, DEFAULT_DEFINITION_LEN));
        Some((word, definition))
    });

    let (word, definition) = match from_post {
        Some(found) => found,
        None => (main_content_headword(root)?, None),
    };
    Some(WordResult::new(word, definition))
}

/// First token of the post title, unless the title is a byline or the
/// site name.
fn post_headword(post: ElementRef<'_>) -> Option<String> {
    let title = element_text(select_first(post, POST_TITLE)?);
    let lower = title.to_lowercase();
    if lower.contains("posted") || lower.contains("old english wordhord") {
        return None;
    }
    let word = clean_archive_word(title.split_whitespace().next()?);
    (!word.is_empty()).then_some(word)
}

fn post_definition(post: ElementRef<'_>, word: &str) -> Option<String> {
    entry_line_definition(&element_text(post), word)
        .or_else(|| paragraph_definition(post, word))
}

/// `<word>, <part of speech>: <definition>.` anywhere in the post.
fn entry_line_definition(text: &str, word: &str) -> Option<String> {
    let pattern = format!(r"{},\s*[^:]+:\s*([^.]+)\.", regex::escape(word));
    let re = Regex::new(&pattern).ok()?;
    let definition = strip_pronunciation(re.captures(text)?.get(1)?.as_str());
    (!definition.is_empty()).then_some(definition)
}

/// Paragraph mentioning `<word>,` or `<word>:`, sliced after its colon.
fn paragraph_definition(post: ElementRef<'_>, word: &str) -> Option<String> {
    let with_comma = format!("{word},");
    let with_colon = format!("{word}:");

    select_all(post, "p").into_iter().find_map(|p| {
        let text = element_text(p);
        if !text.contains(&with_comma) && !text.contains(&with_colon) {
            return None;
        }
        let colon = text.find(':').filter(|&i| i > 0)?;
        let after = text[colon + 1..].trim();
        let definition = match after.find('.') {
            Some(period) if period > 0 => strip_pronunciation(&after[..period]),
            _ => {
                let stripped = strip_pronunciation(after);
                stripped
                    .chars()
                    .take(DEFAULT_DEFINITION_LEN)
                    .collect::<String>()
                    .trim()
                    .to_string()
            }
        };
        (definition.chars().count() > 3).then_some(definition)
    })
}

/// Fallback for pages without post markup: the first plausible heading in
/// the main content area.
fn main_content_headword(root: ElementRef<'_>) -> Option<String> {
    let main = select_first(root, MAIN_CONTENT)?;
    select_all(main, "h1, h2").into_iter().find_map(|heading| {
        let text = element_text(heading);
        let lower = text.to_lowercase();
        let len = text.chars().count();
        if SITE_HEADINGS.iter().any(|s| lower.contains(s)) || len >= 50 || len <= 1 {
            return None;
        }
        let word = clean_archive_word(text.split_whitespace().next()?);
        (word.chars().count() >= 2).then_some(word)
    })
}
