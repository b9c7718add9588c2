//! Word-of-the-day fetch service.
//!
//! One GET per source, no retries. Every failure is logged here and returned
//! as a [`FetchError`]; nothing below this point panics on bad pages.

use std::sync::Arc;

use futures::future::join_all;
use scraper::Html;
use tokio::task::JoinHandle;

use crate::error::{FetchError, Result};
use crate::models::{HttpConfig, SourceConfig, WordResult};
use crate::services::registry::resolve;
use crate::services::scrapers::SiteScraper;
use crate::utils::http::{ReqwestTransport, Transport};

/// Shown by [`WordOfTheDayFetcher::fetch_all`] in place of a failed source.
pub const FAILED_PLACEHOLDER: &str = "Word of the day: Failed to fetch";

/// Fetches and scrapes word-of-the-day pages.
#[derive(Clone)]
pub struct WordOfTheDayFetcher {
    transport: Arc<dyn Transport>,
}

impl WordOfTheDayFetcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build a fetcher over a `reqwest` client configured from `[http]`.
    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(ReqwestTransport::new(config)?)))
    }

    /// Fetch one source and extract its word.
    pub async fn fetch(
        &self,
        source: &SourceConfig,
    ) -> std::result::Result<WordResult, FetchError> {
        let result = self.try_fetch(source).await;
        if let Err(e) = &result {
            log::warn!("{} fetch failed: {}", source.kind, e);
        }
        result
    }

    async fn try_fetch(
        &self,
        source: &SourceConfig,
    ) -> std::result::Result<WordResult, FetchError> {
        let resolved = resolve(source)?;
        log::debug!("Fetching {} from {}", resolved.scraper.name(), resolved.url);

        let response = self.transport.get(&resolved.url).await?;
        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
            });
        }
        let body = response
            .body
            .ok_or_else(|| FetchError::parse("response body could not be read"))?;

        read_page(&resolved.scraper, &body)
    }

    /// Run a fetch on the runtime and hand back its handle.
    pub fn spawn(
        &self,
        source: SourceConfig,
    ) -> JoinHandle<std::result::Result<WordResult, FetchError>> {
        let fetcher = self.clone();
        tokio::spawn(async move { fetcher.fetch(&source).await })
    }

    /// Fetch every labelled source concurrently.
    ///
    /// Lines come back in input order; a failed source yields
    /// [`FAILED_PLACEHOLDER`] whatever its label.
    pub async fn fetch_all(&self, sources: &[(&str, SourceConfig)]) -> Vec<String> {
        let fetches = sources.iter().map(|(label, source)| async move {
            match self.fetch(source).await {
                Ok(result) => result.format(label),
                Err(_) => FAILED_PLACEHOLDER.to_string(),
            }
        });
        join_all(fetches).await
    }
}

/// Scrape an already-downloaded page for a source.
///
/// Custom sources need no URL here; only the selector is used.
pub fn scrape_page(
    source: &SourceConfig,
    body: &str,
) -> std::result::Result<WordResult, FetchError> {
    read_page(&SiteScraper::for_source(source), body)
}

fn read_page(
    scraper: &SiteScraper,
    body: &str,
) -> std::result::Result<WordResult, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::parse("empty response body"));
    }
    let document = Html::parse_document(body);
    scraper
        .scrape(&document)
        .ok_or_else(|| FetchError::not_found(scraper.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceKind;
    use crate::utils::http::HttpResponse;
    use crate::utils::http::mock::MockTransport;

    const MW_URL: &str = "https://www.merriam-webster.com/word-of-the-day";
    const WORDHORD_URL: &str = "https://oldenglishwordhord.com/";

    const MW_PAGE: &str = r#"<html><body>
        <div class="word-and-pronunciation"><h1 class="word-header-txt">Serendipity</h1></div>
        <div class="wod-definition-container">
          <p>The faculty or phenomenon of finding valuable or agreeable things not sought for.</p>
        </div>
    </body></html>"#;

    fn with_transport(transport: MockTransport) -> (WordOfTheDayFetcher, Arc<MockTransport>) {
        let transport = Arc::new(transport);
        (WordOfTheDayFetcher::new(transport.clone()), transport)
    }

    fn mw() -> SourceConfig {
        SourceConfig::builtin(SourceKind::MerriamWebster)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let (fetcher, transport) =
            with_transport(MockTransport::new().with_page(MW_URL, MW_PAGE));

        let result = fetcher.fetch(&mw()).await.unwrap();
        assert_eq!(result.word(), "Serendipity");
        assert_eq!(
            result.definition(),
            Some("The faculty or phenomenon of finding valuable or agreeable things not sought for.")
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_custom_url_never_hits_network() {
        let (fetcher, transport) = with_transport(MockTransport::new());

        let err = fetcher
            .fetch(&SourceConfig::custom("", Some("h1".into())))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let (fetcher, _) = with_transport(MockTransport::new().with_status(MW_URL, 503));
        assert_eq!(
            fetcher.fetch(&mw()).await.unwrap_err(),
            FetchError::Http { status: 503 }
        );
    }

    #[tokio::test]
    async fn test_transport_error() {
        let (fetcher, _) = with_transport(MockTransport::new());
        assert!(matches!(
            fetcher.fetch(&mw()).await.unwrap_err(),
            FetchError::Transport(_)
        ));
    }

    #[tokio::test]
    async fn test_blank_or_unreadable_body() {
        let (fetcher, _) = with_transport(MockTransport::new().with_page(MW_URL, "  \n "));
        assert!(matches!(
            fetcher.fetch(&mw()).await.unwrap_err(),
            FetchError::Parse(_)
        ));

        let (fetcher, _) = with_transport(MockTransport::new().with_response(
            MW_URL,
            Ok(HttpResponse {
                status: 200,
                body: None,
            }),
        ));
        assert!(matches!(
            fetcher.fetch(&mw()).await.unwrap_err(),
            FetchError::Parse(_)
        ));
    }

    #[tokio::test]
    async fn test_no_match_is_not_found() {
        let (fetcher, _) = with_transport(
            MockTransport::new().with_page(MW_URL, "<html><body><p>Down for maintenance.</p></body></html>"),
        );
        assert_eq!(
            fetcher.fetch(&mw()).await.unwrap_err(),
            FetchError::not_found("Merriam-Webster")
        );
    }

    #[tokio::test]
    async fn test_spawn_returns_result() {
        let (fetcher, _) =
            with_transport(MockTransport::new().with_page(MW_URL, MW_PAGE));
        let result = fetcher.spawn(mw()).await.unwrap().unwrap();
        assert_eq!(result.word(), "Serendipity");
    }

    #[tokio::test]
    async fn test_fetch_all_keeps_order_and_placeholders() {
        let (fetcher, transport) = with_transport(
            MockTransport::new()
                .with_page(MW_URL, MW_PAGE)
                .with_status(WORDHORD_URL, 500),
        );
        let lines = fetcher
            .fetch_all(&[
                (
                    "Medieval word of the day",
                    SourceConfig::builtin(SourceKind::OldEnglishWordhord),
                ),
                ("Word of the day", mw()),
                ("Custom word of the day", SourceConfig::custom("", None)),
            ])
            .await;

        assert_eq!(
            lines,
            vec![
                FAILED_PLACEHOLDER.to_string(),
                "Word of the day: Serendipity - The faculty or phenomenon of finding valuable or agreeable things not sought for.".to_string(),
                FAILED_PLACEHOLDER.to_string(),
            ]
        );
        assert_eq!(transport.calls(), 2);
    }

    #[test]
    fn test_scrape_page_offline() {
        let source = SourceConfig::custom("", Some(".term".into()));
        let result = scrape_page(&source, "<div><span class='term'>vellichor</span></div>").unwrap();
        assert_eq!(result.word(), "vellichor");
        assert!(matches!(
            scrape_page(&source, ""),
            Err(FetchError::Parse(_))
        ));
    }
}
