//! Service layer for the word-of-the-day fetcher.
//!
//! This module contains the business logic for:
//! - Text clean-up of scraped words and definitions (`normalize`)
//! - Selector-chain candidate search (`candidates`)
//! - Per-site scraping (`SiteScraper`)
//! - Source resolution (`resolve`)
//! - Fetching (`WordOfTheDayFetcher`)
//! - Once-per-day display (`DailyGate`)

pub mod candidates;
pub mod normalize;
pub mod scrapers;

mod fetcher;
mod gate;
mod registry;

pub use fetcher::{FAILED_PLACEHOLDER, WordOfTheDayFetcher, scrape_page};
pub use gate::DailyGate;
pub use registry::{ResolvedSource, resolve};
pub use scrapers::{CustomScraper, SiteProfile, SiteScraper};
