// src/utils/http.rs

//! HTTP client utilities.
//!
//! Fetching goes through the [`Transport`] trait so the scraping pipeline can
//! be driven by canned pages in tests.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::{FetchError, Result};
use crate::models::HttpConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Only read for 2xx responses; `None` if it could not be decoded
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can GET a page.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET. Only connection-level failures are errors; any status
    /// the server answers with comes back as a response.
    async fn get(&self, url: &Url) -> std::result::Result<HttpResponse, FetchError>;
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> std::result::Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Ok(HttpResponse { status, body: None });
        }

        let body = match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("Failed to read body from {}: {}", url, e);
                None
            }
        };
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Canned responses keyed by URL; unknown URLs fail at the transport.
    #[derive(Default)]
    pub(crate) struct MockTransport {
        responses: Mutex<HashMap<String, std::result::Result<HttpResponse, FetchError>>>,
        calls: AtomicUsize,
    }

    impl MockTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_page(self, url: &str, body: &str) -> Self {
            self.with_response(
                url,
                Ok(HttpResponse {
                    status: 200,
                    body: Some(body.to_string()),
                }),
            )
        }

        pub(crate) fn with_status(self, url: &str, status: u16) -> Self {
            self.with_response(url, Ok(HttpResponse { status, body: None }))
        }

        pub(crate) fn with_response(
            self,
            url: &str,
            response: std::result::Result<HttpResponse, FetchError>,
        ) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(url.to_string(), response);
            self
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn get(&self, url: &Url) -> std::result::Result<HttpResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .get(url.as_str())
                .cloned()
                .unwrap_or_else(|| Err(FetchError::transport(format!("no route to {url}"))))
        }
    }
}
