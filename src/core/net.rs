// src/core/net.rs
// HTTP GET seam. The request and the body read are the only await points in a scrape.

use async_trait::async_trait;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into an HTML body.
/// The pipeline only talks to this trait, so tests can serve fixtures.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// reqwest-backed fetcher. No timeout and no retry: a hung request holds
/// its worker slot until the server gives up.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| ScrapeError::Http { url: s!("<client init>"), source })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let http_err = |source| ScrapeError::Http { url: s!(url), source };

        let resp = self.client.get(url).send().await.map_err(http_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().await.map_err(http_err)
    }
}
