//! Dictionary.com word of the day.

use super::{DefinitionStrategy, HeadwordStrategy, MetaTitle, SiteProfile};

pub static DICTIONARY_COM: SiteProfile = SiteProfile {
    name: "Dictionary.com",
    endpoint: "https://www.dictionary.com/e/word-of-the-day/",
    headword: &[
        HeadwordStrategy::Chain(&[
            "h1.wotd-item__headword",
            ".wotd-item-headword",
            "h1[class*=headword]",
            ".wotd-headword",
            "h1.wotd-headword",
            "[data-headword]",
            ".otd-item-headword",
            "h1.otd-item-headword",
            ".wotd-item__headword",
            "h1[data-headword]",
        ]),
        HeadwordStrategy::Filtered(
            &["article h1", "main h1", ".wotd-item h1", "[class*=wotd] h1"],
            is_boilerplate,
        ),
        HeadwordStrategy::Meta(MetaTitle::Whole),
    ],
    definition: &[DefinitionStrategy::Chain(&[
        ".wotd-item__definition p",
        ".wotd-item__definition",
        ".otd-item__definition p",
        ".wotd-definition p",
        "p.wotd-definition",
    ])],
};

fn is_boilerplate(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    lower.contains("word of the day") || lower == "word" || lower.chars().count() < 3
}
