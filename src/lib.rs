// src/lib.rs

//! Word-of-the-day scraper.
//!
//! Fetches a daily word (and a short definition when the page offers one)
//! from a handful of dictionary sites or a user-supplied page, and shows each
//! feed at most once per local day.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

pub use error::{AppError, FetchError, Result};
pub use models::{Config, Feed, SourceConfig, SourceKind, WordResult};
pub use services::{DailyGate, WordOfTheDayFetcher};
