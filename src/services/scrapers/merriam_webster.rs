//! Merriam-Webster word of the day.

use super::{DefinitionStrategy, HeadwordStrategy, MetaTitle, SiteProfile};

pub static MERRIAM_WEBSTER: SiteProfile = SiteProfile {
    name: "Merriam-Webster",
    endpoint: "https://www.merriam-webster.com/word-of-the-day",
    headword: &[
        HeadwordStrategy::Chain(&[
            "[data-word]",
            ".wod-headword",
            "h1.word-header-txt",
            ".word-and-pronunciation h1",
            ".wotd-word",
            "h1.wotd-word",
            ".word-header h1",
            "h1.word",
        ]),
        HeadwordStrategy::Filtered(
            &["article h1", "main h1", ".word-header h1", "h1[class*=word]"],
            is_boilerplate,
        ),
        HeadwordStrategy::Meta(MetaTitle::TrailingSegment),
    ],
    definition: &[
        DefinitionStrategy::Chain(&[
            ".wod-definition-container p",
            ".wod-definition-text-container p",
            ".word-definition p",
            ".definition p",
            ".wotd-definition p",
            "p.wod-definition",
            ".wod-definition-container",
            ".wod-definition-text-container",
        ]),
        DefinitionStrategy::Nearby {
            selector: "p",
            levels: 1,
            reject_headword: false,
        },
    ],
};

/// Page banners and question-style headings.
fn is_boilerplate(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    lower.contains("word of the day")
        || lower == "word"
        || lower == "day"
        || ["what", "how", "when", "where", "why"]
            .iter()
            .any(|q| lower.starts_with(q))
}
