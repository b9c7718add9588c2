// src/models/mod.rs

//! Domain models for the word-of-the-day fetcher.

mod config;
mod source;
mod word;

// Re-export all public types
pub use config::{Config, CustomConfig, FeedsConfig, HttpConfig, LoggingConfig};
pub use source::{Feed, SourceConfig, SourceKind};
pub use word::WordResult;
