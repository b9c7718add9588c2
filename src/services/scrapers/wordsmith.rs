//! Wordsmith.org "A.Word.A.Day".
//!
//! The page is table-based: the word sits in an `h2` and the definition in a
//! neighbouring cell.

use super::{DefinitionStrategy, HeadwordStrategy, SiteProfile};

pub static WORDSMITH: SiteProfile = SiteProfile {
    name: "Wordsmith.org",
    endpoint: "https://wordsmith.org/words/today.html",
    headword: &[
        HeadwordStrategy::TokenScan(
            &["table[width='100%'] h2", "table h2", "h2", ".word"],
            is_boilerplate,
        ),
        HeadwordStrategy::EveryMatch("b, strong"),
    ],
    definition: &[DefinitionStrategy::Nearby {
        selector: "td p, td, p",
        levels: 2,
        reject_headword: true,
    }],
};

fn is_boilerplate(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    lower.contains("a word a day")
        || lower.contains("wordsmith")
        || lower.contains("word of the day")
        || lower == "word"
        || lower.chars().count() < 3
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    #[test]
    fn test_table_layout() {
        let doc = Html::parse_document(
            r#"<h2>A Word A Day</h2>
               <table width="100%"><tr><td>
                 <h2>perspicacious</h2>
                 <p>Having keen insight or discernment; able to notice and understand things that are not obvious.</p>
               </td></tr></table>"#,
        );
        let result = WORDSMITH.scrape(&doc).unwrap();
        assert_eq!(result.word(), "perspicacious");
        assert_eq!(
            result.definition(),
            Some(
                "Having keen insight or discernment; able to notice and understand things that are not obvious."
            )
        );
    }

    #[test]
    fn test_bold_fallback() {
        let doc = Html::parse_document(
            r#"<h2>Wordsmith.org</h2><div><b>Word of the Day</b><strong>callow</strong></div>"#,
        );
        let result = WORDSMITH.scrape(&doc).unwrap();
        assert_eq!(result.word(), "callow");
        assert_eq!(result.definition(), None);
    }

    #[test]
    fn test_definition_repeating_word_is_dropped() {
        let doc = Html::parse_document(
            r#"<table><tr><td><h2>flaneur</h2><p>Pronunciation of flaneur: flah-NUHR</p></td></tr></table>"#,
        );
        let result = WORDSMITH.scrape(&doc).unwrap();
        assert_eq!(result.word(), "flaneur");
        assert_eq!(result.definition(), None);
    }
}
