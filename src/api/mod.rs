pub mod api_structs;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, ClientBuilder, StatusCode
};
use std::{future::Future, time::Duration};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("online bots request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("online bots request returned status {0}")]
    Status(StatusCode)
}

/// Source of the online bots feed, one JSON document per line.
pub trait BotFeed {
    fn online_bots(&self) -> impl Future<Output = Result<String, FeedError>> + Send;
}

/// Fetches the online bots feed over HTTP.
pub struct LichessClient {
    client: Client,
    feed_url: String
}

fn ndjson_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/x-ndjson"));

    headers
}

impl LichessClient {
    pub fn new(feed_url: &str, timeout: Duration) -> Result<LichessClient, FeedError> {
        let client = ClientBuilder::new()
            .default_headers(ndjson_headers())
            .timeout(timeout)
            .build()?;

        Ok(LichessClient {
            client,
            feed_url: feed_url.to_string()
        })
    }
}

impl BotFeed for LichessClient {
    async fn online_bots(&self) -> Result<String, FeedError> {
        info!("Fetching online bots from {}", self.feed_url);

        let response = self.client.get(&self.feed_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let body = response.text().await?;
        info!("Fetched {} bytes of online bot data", body.len());

        Ok(body)
    }
}
