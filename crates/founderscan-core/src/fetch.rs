use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client, Url};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::settings::ScanSettings;

/// Why a request could not complete.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
    #[error("connection to {url} failed")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    fn classify(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        let url = url.to_string();
        if err.is_timeout() {
            Self::Timeout { url, timeout }
        } else if err.is_connect() {
            Self::Connect { url, source: err }
        } else {
            Self::Request { url, source: err }
        }
    }
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: Url,
    pub status: u16,
    pub headers: HeaderMap,
    /// Body decoded as UTF-8 with invalid sequences replaced.
    pub body: String,
    /// Time until the response headers arrived.
    pub elapsed: Duration,
}

/// Source of page content so the pipeline can run against in-memory fixtures.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page under test. Failure here aborts the scan.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;

    /// Status code of an auxiliary resource, using the shorter probe timeout.
    async fn probe(&self, url: &str) -> Result<u16, FetchError>;
}

/// `PageFetcher` backed by a reqwest client using the webpki trust store.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
    timeout: Duration,
    probe_timeout: Duration,
}

impl HttpFetcher {
    pub fn new(settings: &ScanSettings) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            timeout: settings.timeout(),
            probe_timeout: settings.probe_timeout(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(name = "fetch_page", skip(self), fields(timeout = ?self.timeout))]
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let started = Instant::now();
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| FetchError::classify(url, self.timeout, err))?;
        let elapsed = started.elapsed();

        let final_url = response.url().clone();
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(|err| {
            if err.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                    timeout: self.timeout,
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source: err,
                }
            }
        })?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!(
            %final_url,
            status,
            body_len = body.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "page fetched"
        );
        Ok(FetchedPage {
            url: final_url,
            status,
            headers,
            body,
            elapsed,
        })
    }

    #[instrument(name = "probe", skip(self), fields(timeout = ?self.probe_timeout))]
    async fn probe(&self, url: &str) -> Result<u16, FetchError> {
        let response = self
            .http
            .get(url)
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(|err| FetchError::classify(url, self.probe_timeout, err))?;
        let status = response.status().as_u16();
        debug!(status, "probe answered");
        Ok(status)
    }
}
