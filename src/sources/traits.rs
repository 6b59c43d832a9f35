use serde_json::Value;

use crate::domain::{ExtractorKind, SourceFormat};
use crate::errors::{FeedError, FeedResult};
use crate::sources::extraction::Extraction;

/// Raw content returned by a [`Fetcher`].
#[derive(Debug, Clone)]
pub enum SourceContent {
    Html(String),
    Json(Value),
}

/// A fetched page together with the URL it came from.
#[derive(Debug, Clone)]
pub struct Source {
    pub url: String,
    pub content: SourceContent,
}

impl Source {
    pub fn html(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: SourceContent::Html(body.into()),
        }
    }

    pub fn json(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            content: SourceContent::Json(body),
        }
    }

    pub fn as_html(&self, extractor: ExtractorKind) -> FeedResult<&str> {
        match &self.content {
            SourceContent::Html(body) => Ok(body),
            SourceContent::Json(_) => Err(unexpected(extractor, SourceFormat::Html)),
        }
    }

    pub fn as_json(&self, extractor: ExtractorKind) -> FeedResult<&Value> {
        match &self.content {
            SourceContent::Json(body) => Ok(body),
            SourceContent::Html(_) => Err(unexpected(extractor, SourceFormat::Json)),
        }
    }
}

fn unexpected(extractor: ExtractorKind, expected: SourceFormat) -> FeedError {
    FeedError::UnexpectedContent {
        extractor: extractor.to_string(),
        expected: expected.as_str(),
    }
}

/// Performs one blocking request per call. No retries.
#[cfg_attr(test, mockall::automock)]
pub trait Fetcher: Send + Sync {
    /// Fetch a page and return its decoded body
    fn fetch_text(&self, url: &str) -> FeedResult<String>;

    /// Fetch an endpoint and parse its body as JSON
    fn fetch_json(&self, url: &str) -> FeedResult<Value>;
}

pub trait Extractor: Send + Sync {
    /// Identifies this extractor
    fn kind(&self) -> ExtractorKind;

    /// Content type the fetcher must produce for this extractor
    fn format(&self) -> SourceFormat;

    /// Turn fetched content into feed items, collecting per-record failures
    fn extract(&self, source: &Source) -> FeedResult<Extraction>;
}
