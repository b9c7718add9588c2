//! Source resolution.
//!
//! Maps a [`SourceConfig`] to the URL to fetch and the scraper that reads it.

use url::Url;

use crate::error::FetchError;
use crate::models::{SourceConfig, SourceKind};
use crate::services::scrapers::SiteScraper;

/// Everything needed to fetch and read one source.
#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub url: Url,
    pub scraper: SiteScraper,
}

/// Resolve a source to its endpoint and scraper.
///
/// Custom sources must carry an absolute http(s) URL; anything else is a
/// configuration error, raised before any request is made.
pub fn resolve(source: &SourceConfig) -> Result<ResolvedSource, FetchError> {
    let scraper = SiteScraper::for_source(source);
    let url = match scraper.endpoint() {
        Some(endpoint) => Url::parse(endpoint)
            .map_err(|e| FetchError::config(format!("bad endpoint {endpoint}: {e}")))?,
        None => custom_url(source)?,
    };
    Ok(ResolvedSource { url, scraper })
}

fn custom_url(source: &SourceConfig) -> Result<Url, FetchError> {
    debug_assert_eq!(source.kind, SourceKind::Custom);

    let raw = source.url.trim();
    if raw.is_empty() {
        return Err(FetchError::config("custom URL not configured"));
    }
    let url =
        Url::parse(raw).map_err(|e| FetchError::config(format!("invalid custom URL {raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::config(format!(
            "custom URL {raw} must use http or https"
        )));
    }
    Ok(url)
}
