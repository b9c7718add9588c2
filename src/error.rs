// src/error.rs

//! Unified error handling for the word-of-the-day fetcher.

use std::fmt;

use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Why a single word-of-the-day fetch produced nothing.
///
/// None of these are fatal to the host; they are logged at the fetch
/// boundary and turned into "no display".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Source selected without a usable URL
    #[error("Configuration error: {0}")]
    Config(String),

    /// DNS, connect, timeout or reset
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    /// Body missing or not usable as HTML
    #[error("Parse error: {0}")]
    Parse(String),

    /// Page parsed but no selector chain produced a word
    #[error("No word found on {site} page")]
    NotFound { site: String },
}

impl FetchError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a transport error from any displayable cause.
    pub fn transport(cause: impl fmt::Display) -> Self {
        Self::Transport(cause.to_string())
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a not-found error for a site.
    pub fn not_found(site: impl Into<String>) -> Self {
        Self::NotFound { site: site.into() }
    }
}

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Word fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
