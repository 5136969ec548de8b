use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::NetworkError;

/// Anything that can turn a URL into an HTML body.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// One GET, no retries. Non-2xx statuses are errors.
    async fn fetch(&self, url: &Url) -> Result<String, NetworkError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

/// Plain reqwest-backed fetcher.
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    /// `timeout` of `None` keeps the client default (no overall timeout).
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(HttpFetcher { http })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, url: &Url) -> Result<String, NetworkError> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| NetworkError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                url: url.to_string(),
                status,
            });
        }

        resp.text().await.map_err(|source| NetworkError::Request {
            url: url.to_string(),
            source,
        })
    }
}
