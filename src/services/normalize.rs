//! Text normalization for scraped headwords and definitions.
//!
//! Pure string functions: picking a headword out of a heading, rejecting
//! noise, and trimming definitions down to a displayable sentence.

use std::sync::LazyLock;

use regex::Regex;

/// Default definition length cap, in characters.
pub const DEFAULT_DEFINITION_LEN: usize = 200;

/// Minimum headword length accepted by the built-in scrapers.
pub const MIN_WORD_LENGTH: usize = 4;

/// Position from which a sentence-ending period is preferred.
const SENTENCE_SEARCH_FROM: usize = 50;

/// Definitions this short (after trimming) are treated as noise.
const MIN_DEFINITION_LEN: usize = 10;

/// Leading phrases that announce a word rather than being one.
/// Longest first so "word of the day" wins over "word".
const FILLER_PHRASES: [&str; 12] = [
    "word of the day",
    "word of day",
    "today's word",
    "the word",
    "word",
    "day",
    "what is",
    "what's",
    "how to",
    "when is",
    "where is",
    "why is",
];

/// Characters that may separate a filler phrase from the word itself.
/// Hyphens are left out so compounds like "Day-lily" stay whole.
const FILLER_SEPARATORS: [char; 6] = [':', '–', '—', '|', '.', '!'];

/// Tokens skipped while looking for the first real word in a heading.
const EXTRACT_EXCLUDED: [&str; 19] = [
    "the",
    "word",
    "day",
    "what",
    "how",
    "when",
    "where",
    "why",
    "who",
    "which",
    "this",
    "that",
    "means",
    "mean",
    "example",
    "definition",
    "pronunciation",
    "awordaday",
    "wordsmith",
];

/// Exact (case-insensitive) matches that are never accepted as a headword.
const STOP_WORDS: [&str; 40] = [
    "word",
    "day",
    "the",
    "of",
    "and",
    "or",
    "but",
    "in",
    "on",
    "at",
    "to",
    "for",
    "what",
    "how",
    "when",
    "where",
    "why",
    "who",
    "which",
    "this",
    "that",
    "these",
    "those",
    "means",
    "mean",
    "example",
    "definition",
    "pronunciation",
    "awordaday",
    "wordsmith",
    "with",
    "from",
    "into",
    "onto",
    "upon",
    "about",
    "above",
    "below",
    "under",
    "over",
];

/// A parenthetical containing a `/`, e.g. `(LOO-sid /ˈluːsɪd/)`.
static PRONUNCIATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\([^)]*/[^)]*\)").ok());

/// Old English letters kept by [`clean_archive_word`].
const ARCHIVE_LETTERS: &str = "āēīōūǣȳæþðƿ";

/// Pick the most likely headword out of a text fragment.
///
/// After a leading filler phrase ("Word of the Day:", "What is") only the
/// next token is considered: it is returned if longer than two letters and
/// not "the", otherwise the result is `None`. Without a filler phrase the
/// first letters-only token of length >= 4 that is not structural noise is
/// returned, falling back to the first token even if short.
pub fn extract_word(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(rest) = strip_filler(text) {
        let candidate = rest
            .trim_start_matches(|c: char| !c.is_alphanumeric())
            .split_whitespace()
            .next()
            .map(letters_only)?;
        return (candidate.len() > 2 && !candidate.eq_ignore_ascii_case("the"))
            .then_some(candidate);
    }

    let tokens: Vec<String> = text.split_whitespace().map(letters_only).collect();
    tokens
        .iter()
        .find(|token| token.len() >= MIN_WORD_LENGTH && !is_excluded(token))
        .or(tokens.first())
        .cloned()
}

/// Whether a candidate looks like a real headword.
///
/// Requires three or more ASCII letters and no exact stop-word match.
/// Containment is not checked: "wherein" passes although "where" is listed.
pub fn is_valid_word(word: &str) -> bool {
    let word = word.trim();
    word.len() >= 3
        && word.chars().all(|c| c.is_ascii_alphabetic())
        && !STOP_WORDS.iter().any(|stop| word.eq_ignore_ascii_case(stop))
}

/// First whitespace token that validates as a headword of `min_length`.
pub fn first_valid_token(text: &str, min_length: usize) -> Option<String> {
    text.split_whitespace()
        .map(letters_only)
        .find(|token| token.len() >= min_length && is_valid_word(token))
}

/// Cut a definition down to its first sentence, or to `max_len` characters.
///
/// Returns `None` when the trimmed text has ten characters or fewer. A
/// period at or after character 50 is preferred as the cut point; any
/// earlier period past character 10 is used otherwise. Pronunciation
/// guides such as `(LOO-sid /ˈluːsɪd/)` are removed from the result.
pub fn truncate_definition(text: &str, max_len: usize) -> Option<String> {
    let chars: Vec<char> = text.trim().chars().collect();
    if chars.len() <= MIN_DEFINITION_LEN {
        return None;
    }

    let window = &chars[..chars.len().min(max_len)];
    let period = window
        .iter()
        .skip(SENTENCE_SEARCH_FROM)
        .position(|&c| c == '.')
        .map(|i| i + SENTENCE_SEARCH_FROM)
        .or_else(|| window.iter().position(|&c| c == '.'));

    let cut: String = match period {
        Some(end) if end > MIN_DEFINITION_LEN => chars[..=end].iter().collect(),
        _ => window.iter().collect(),
    };

    let cleaned = strip_pronunciation(&cut);
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Remove every parenthetical that contains a `/`.
pub fn strip_pronunciation(text: &str) -> String {
    match PRONUNCIATION.as_ref() {
        Some(re) => normalize_whitespace(&re.replace_all(text, " ")),
        None => normalize_whitespace(text),
    }
}

/// Cap an archive definition, marking a mid-sentence cut with `...`.
pub fn cap_definition(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut capped = text.chars().take(max_len).collect::<String>().trim().to_string();
    if !capped.ends_with('.') {
        capped.push_str("...");
    }
    capped
}

/// Keep ASCII letters, Old English letters and hyphens.
pub fn clean_archive_word(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '-' || ARCHIVE_LETTERS.contains(*c))
        .collect()
}

/// Collapse runs of whitespace into single spaces.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn letters_only(token: &str) -> String {
    token.chars().filter(char::is_ascii_alphabetic).collect()
}

fn is_excluded(token: &str) -> bool {
    EXTRACT_EXCLUDED
        .iter()
        .any(|word| token.eq_ignore_ascii_case(word))
}

/// Text after a leading filler phrase, if there is one.
fn strip_filler(text: &str) -> Option<&str> {
    FILLER_PHRASES.iter().find_map(|phrase| {
        let head = text.get(..phrase.len())?;
        if !head.eq_ignore_ascii_case(phrase) {
            return None;
        }
        let rest = &text[phrase.len()..];
        match rest.chars().next() {
            None => Some(rest),
            Some(c) if c.is_whitespace() || FILLER_SEPARATORS.contains(&c) => Some(rest),
            Some(_) => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_word_strips_banner() {
        assert_eq!(
            extract_word("Word of the Day: Serendipity").as_deref(),
            Some("Serendipity")
        );
        assert_eq!(
            extract_word("Today's Word - quixotic").as_deref(),
            Some("quixotic")
        );
    }

    #[test]
    fn test_extract_word_plain_heading() {
        assert_eq!(extract_word("the quick").as_deref(), Some("quick"));
        assert_eq!(extract_word("  lugubrious  ").as_deref(), Some("lugubrious"));
        assert_eq!(extract_word("ephemeral,").as_deref(), Some("ephemeral"));
    }

    #[test]
    fn test_extract_word_banner_only() {
        assert_eq!(extract_word("Word of the Day"), None);
        assert_eq!(extract_word("word"), None);
        assert_eq!(extract_word("What is"), None);
        assert_eq!(extract_word(""), None);
        assert_eq!(extract_word("   "), None);
    }

    #[test]
    fn test_extract_word_remainder_threshold() {
        // After a filler phrase, three letters are enough
        assert_eq!(extract_word("What is wit").as_deref(), Some("wit"));
        // but two are not, and neither is "the"
        assert_eq!(extract_word("What is it"), None);
        assert_eq!(extract_word("The word the"), None);
    }

    #[test]
    fn test_extract_word_filler_needs_boundary() {
        assert_eq!(extract_word("Wordsmith favourites").as_deref(), Some("favourites"));
        assert_eq!(extract_word("Daylight").as_deref(), Some("Daylight"));
    }

    #[test]
    fn test_extract_word_keeps_hyphenated_compounds() {
        assert_eq!(extract_word("Day-lily").as_deref(), Some("Daylily"));
        assert_eq!(extract_word("Word-hoard").as_deref(), Some("Wordhoard"));
    }

    #[test]
    fn test_extract_word_only_checks_token_after_filler() {
        assert_eq!(extract_word("Word of the Day: the ineffable"), None);
        assert_eq!(extract_word("Word of the Day is perspicacious"), None);
        assert_eq!(
            extract_word("Word of the Day | sonder, n.").as_deref(),
            Some("sonder")
        );
    }

    #[test]
    fn test_extract_word_skips_noise_tokens() {
        assert_eq!(
            extract_word("Definition: this means gregarious").as_deref(),
            Some("gregarious")
        );
    }

    #[test]
    fn test_extract_word_falls_back_to_first_token() {
        assert_eq!(extract_word("ox is").as_deref(), Some("ox"));
        assert_eq!(extract_word("which means").as_deref(), Some("which"));
    }

    #[test]
    fn test_is_valid_word() {
        assert!(is_valid_word("serendipity"));
        assert!(is_valid_word("Wit"));
        assert!(is_valid_word("wherein"));

        assert!(!is_valid_word("ox"));
        assert!(!is_valid_word("well-known"));
        assert!(!is_valid_word("naïve"));
        assert!(!is_valid_word("abc1"));
        assert!(!is_valid_word("WHERE"));
        assert!(!is_valid_word("Pronunciation"));
        assert!(!is_valid_word(""));
    }

    #[test]
    fn test_first_valid_token() {
        assert_eq!(
            first_valid_token("A.Word.A.Day with quidnunc", 4).as_deref(),
            Some("quidnunc")
        );
        assert_eq!(
            first_valid_token("with the quidnunc (KWID-nunk)", 4).as_deref(),
            Some("quidnunc")
        );
        assert_eq!(first_valid_token("of and or", 4), None);
    }

    #[test]
    fn test_truncate_definition_short_text() {
        assert_eq!(truncate_definition("brief", DEFAULT_DEFINITION_LEN), None);
        assert_eq!(truncate_definition("  0123456789  ", DEFAULT_DEFINITION_LEN), None);
    }

    #[test]
    fn test_truncate_definition_cuts_at_sentence() {
        let mut text = "x".repeat(120);
        text.push('.');
        text.push_str(&"y".repeat(179));
        assert_eq!(text.chars().count(), 300);

        let result = truncate_definition(&text, DEFAULT_DEFINITION_LEN).unwrap();
        assert_eq!(result.chars().count(), 121);
        assert!(result.ends_with('.'));
    }

    #[test]
    fn test_truncate_definition_prefers_late_period() {
        let text = "Of a kind. Having or showing a cheerful readiness to do what is asked. More text follows.";
        let result = truncate_definition(text, DEFAULT_DEFINITION_LEN).unwrap();
        assert_eq!(
            result,
            "Of a kind. Having or showing a cheerful readiness to do what is asked."
        );
    }

    #[test]
    fn test_truncate_definition_falls_back_to_early_period() {
        let text = "Clear and easily understood. Bright.";
        assert_eq!(
            truncate_definition(text, DEFAULT_DEFINITION_LEN).as_deref(),
            Some("Clear and easily understood.")
        );
    }

    #[test]
    fn test_truncate_definition_hard_cut() {
        let text = "z".repeat(250);
        let result = truncate_definition(&text, DEFAULT_DEFINITION_LEN).unwrap();
        assert_eq!(result.len(), DEFAULT_DEFINITION_LEN);
    }

    #[test]
    fn test_truncate_definition_handles_multibyte() {
        let text = "þæt ǣfen wæs lang ".repeat(20);
        let result = truncate_definition(&text, 30).unwrap();
        assert!(result.chars().count() <= 30);
    }

    #[test]
    fn test_truncate_definition_strips_pronunciation() {
        let text = "lucid (LOO-sid /ˈluːsɪd/) means clear to the understanding.";
        assert_eq!(
            truncate_definition(text, DEFAULT_DEFINITION_LEN).as_deref(),
            Some("lucid means clear to the understanding.")
        );
    }

    #[test]
    fn test_strip_pronunciation_keeps_plain_parentheses() {
        assert_eq!(
            strip_pronunciation("a (plural) noun (AY/ay) here"),
            "a (plural) noun here"
        );
        assert_eq!(strip_pronunciation("unclosed (a/b"), "unclosed (a/b");
        assert_eq!(
            strip_pronunciation("hwæt (/hwæt/),  interjection (/ˈhwæt/)"),
            "hwæt , interjection"
        );
    }

    #[test]
    fn test_cap_definition() {
        assert_eq!(cap_definition("short.", 200), "short.");

        let capped = cap_definition(&"ab ".repeat(100), 200);
        assert!(capped.ends_with("..."));
        assert!(capped.chars().count() <= 203);

        let sentence = format!("{}.{}", "a".repeat(199), "b".repeat(10));
        assert_eq!(cap_definition(&sentence, 200), format!("{}.", "a".repeat(199)));
    }

    #[test]
    fn test_clean_archive_word() {
        assert_eq!(clean_archive_word("ǣfen-glōm,"), "ǣfen-glōm");
        assert_eq!(clean_archive_word("“hwæt”"), "hwæt");
        assert_eq!(clean_archive_word("þēod!"), "þēod");
    }
}
