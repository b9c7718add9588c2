// src/models/source.rs

//! Word sources and the feeds that display them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Where a word of the day comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    #[default]
    MerriamWebster,
    DictionaryCom,
    Wordsmith,
    OldEnglishWordhord,
    /// User-supplied URL and selector
    Custom,
}

impl SourceKind {
    /// All known kinds, in display order.
    pub const ALL: [SourceKind; 5] = [
        SourceKind::MerriamWebster,
        SourceKind::DictionaryCom,
        SourceKind::Wordsmith,
        SourceKind::OldEnglishWordhord,
        SourceKind::Custom,
    ];

    /// Human-readable site name.
    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::MerriamWebster => "Merriam-Webster",
            SourceKind::DictionaryCom => "Dictionary.com",
            SourceKind::Wordsmith => "Wordsmith.org",
            SourceKind::OldEnglishWordhord => "Old English Wordhord",
            SourceKind::Custom => "Custom URL",
        }
    }

    /// Identifier used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            SourceKind::MerriamWebster => "merriam-webster",
            SourceKind::DictionaryCom => "dictionary-com",
            SourceKind::Wordsmith => "wordsmith",
            SourceKind::OldEnglishWordhord => "old-english-wordhord",
            SourceKind::Custom => "custom",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.key()).collect();
                AppError::config(format!(
                    "unknown source '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

/// Identifies where to fetch from. Read-only to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceConfig {
    pub kind: SourceKind,

    /// Target URL, only used by [`SourceKind::Custom`]
    pub url: String,

    /// CSS selector override, only used by [`SourceKind::Custom`]
    pub selector: Option<String>,
}

impl SourceConfig {
    /// A built-in site with its fixed endpoint.
    pub fn builtin(kind: SourceKind) -> Self {
        Self {
            kind,
            url: String::new(),
            selector: None,
        }
    }

    /// A user-supplied page and optional selector override.
    pub fn custom(url: impl Into<String>, selector: Option<String>) -> Self {
        Self {
            kind: SourceKind::Custom,
            url: url.into(),
            selector: selector.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// One independently gated word shown to the user.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Feed {
    Primary,
    Medieval,
    Custom,
}

impl Feed {
    pub const ALL: [Feed; 3] = [Feed::Primary, Feed::Medieval, Feed::Custom];

    /// Prefix used when the word is displayed.
    pub fn label(&self) -> &'static str {
        match self {
            Feed::Primary => "Word of the day",
            Feed::Medieval => "Medieval word of the day",
            Feed::Custom => "Custom word of the day",
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
