//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Feed, SourceConfig, SourceKind};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Which feeds are shown and how
    #[serde(default)]
    pub feeds: FeedsConfig,

    /// User-supplied source
    #[serde(default)]
    pub custom: CustomConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    ///
    /// Colour and feed toggles are passed through untouched; the custom URL
    /// is only checked when something would actually use it.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.custom_in_use() {
            let url = self.custom.url.trim();
            if url.is_empty() {
                return Err(AppError::validation(
                    "custom.url is empty but the custom source is enabled",
                ));
            }
            let parsed = url::Url::parse(url)
                .map_err(|e| AppError::validation(format!("custom.url '{url}': {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(AppError::validation(format!(
                    "custom.url '{url}' must use http or https"
                )));
            }
        }
        Ok(())
    }

    /// Whether the given feed is switched on.
    pub fn is_enabled(&self, feed: Feed) -> bool {
        match feed {
            Feed::Primary => self.feeds.word_of_the_day,
            Feed::Medieval => self.feeds.medieval_word_of_the_day,
            Feed::Custom => self.feeds.custom_word_of_the_day,
        }
    }

    /// Enabled feeds in display order.
    pub fn enabled_feeds(&self) -> Vec<Feed> {
        Feed::ALL
            .into_iter()
            .filter(|feed| self.is_enabled(*feed))
            .collect()
    }

    /// The source a feed reads from.
    pub fn source_for(&self, feed: Feed) -> SourceConfig {
        match feed {
            Feed::Primary if self.feeds.source == SourceKind::Custom => self.custom_source(),
            Feed::Primary => SourceConfig::builtin(self.feeds.source),
            Feed::Medieval => SourceConfig::builtin(SourceKind::OldEnglishWordhord),
            Feed::Custom => self.custom_source(),
        }
    }

    /// The configured custom URL and selector as a source.
    pub fn custom_source(&self) -> SourceConfig {
        SourceConfig::custom(self.custom.url.trim(), Some(self.custom.selector.clone()))
    }

    fn custom_in_use(&self) -> bool {
        self.feeds.custom_word_of_the_day
            || (self.feeds.word_of_the_day && self.feeds.source == SourceKind::Custom)
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Feed toggles and display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    /// Show the primary word of the day
    #[serde(default = "defaults::enabled")]
    pub word_of_the_day: bool,

    /// Show the Old English word of the day
    #[serde(default = "defaults::enabled")]
    pub medieval_word_of_the_day: bool,

    /// Show a word scraped from `custom.url`
    #[serde(default)]
    pub custom_word_of_the_day: bool,

    /// Site backing the primary feed
    #[serde(default)]
    pub source: SourceKind,

    /// Message colour as `#RRGGBB`, handed to the message sink as-is
    #[serde(default = "defaults::message_color")]
    pub message_color: String,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            word_of_the_day: defaults::enabled(),
            medieval_word_of_the_day: defaults::enabled(),
            custom_word_of_the_day: false,
            source: SourceKind::default(),
            message_color: defaults::message_color(),
        }
    }
}

/// Custom source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomConfig {
    /// Page to scrape
    #[serde(default)]
    pub url: String,

    /// CSS selector locating the word on that page
    #[serde(default = "defaults::custom_selector")]
    pub selector: String,
}

impl Default for CustomConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            selector: defaults::custom_selector(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; wotd/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn enabled() -> bool {
        true
    }
    pub fn message_color() -> String {
        "#00FFFF".into()
    }
    pub fn custom_selector() -> String {
        "h1".into()
    }
    pub fn log_level() -> String {
        "info".into()
    }
}
