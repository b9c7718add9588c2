//! Scraped word data structure.

use serde::{Deserialize, Serialize};

/// A headword with an optional short definition.
///
/// Only produced by a successful scrape and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordResult {
    word: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    definition: Option<String>,
}

impl WordResult {
    /// Create a result; an empty definition is stored as `None`.
    pub fn new(word: impl Into<String>, definition: Option<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.filter(|d| !d.trim().is_empty()),
        }
    }

    /// The headword.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The definition, if one was found.
    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    /// Render a single display line, e.g. `"Word of the day: lucid - clear."`.
    pub fn format(&self, label: &str) -> String {
        match &self.definition {
            Some(definition) => format!("{label}: {} - {definition}", self.word),
            None => format!("{label}: {}", self.word),
        }
    }
}
