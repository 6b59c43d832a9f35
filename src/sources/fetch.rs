use reqwest::blocking::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::errors::{FeedError, FeedResult};
use crate::sources::traits::Fetcher;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn get(&self, url: &str) -> FeedResult<Response> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "Fetched source");

        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> FeedResult<String> {
        Ok(self.get(url)?.text()?)
    }

    fn fetch_json(&self, url: &str) -> FeedResult<Value> {
        let body = self.get(url)?.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }
}
