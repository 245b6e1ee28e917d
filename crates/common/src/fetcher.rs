use reqwest::{redirect, Client, StatusCode};
use tracing::info;

use crate::error::{GamethreadError, GamethreadResult};

/// A fetched page whose status has not been judged yet.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: StatusCode,
    pub body: String,
}

/// Outbound HTML fetches. Every call is a single request: no timeout,
/// retry or caching.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
    no_redirect_client: Client,
}

impl PageFetcher {
    pub fn new(user_agent: &str) -> GamethreadResult<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        let no_redirect_client = Client::builder()
            .user_agent(user_agent)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            no_redirect_client,
        })
    }

    pub async fn fetch(&self, url: &str) -> GamethreadResult<Page> {
        info!("Fetching page: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        info!("Fetched {} ({}, {} bytes)", url, status, body.len());
        Ok(Page { status, body })
    }

    pub async fn fetch_ok(&self, url: &str) -> GamethreadResult<String> {
        info!("Fetching page: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Requests `url` once without following redirects. 3xx answers are
    /// accepted; 4xx and 5xx are errors.
    pub async fn probe_without_redirect(&self, url: &str) -> GamethreadResult<StatusCode> {
        let response = self
            .no_redirect_client
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(GamethreadError::HttpRequest)?;

        info!("Probed {} without redirects: {}", url, response.status());
        Ok(response.status())
    }
}
