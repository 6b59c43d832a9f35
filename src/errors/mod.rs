use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown feed: {0}")]
    UnknownFeed(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    // Parsing errors
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Source parsing failed: {0}")]
    Parse(String),

    #[error("Extractor {extractor} expected {expected} content")]
    UnexpectedContent {
        extractor: String,
        expected: &'static str,
    },

    // Output errors
    #[error("RSS rendering failed: {0}")]
    Rss(#[from] rss::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FeedResult<T> = Result<T, FeedError>;

/// Why a single candidate record was left out of a feed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("unparseable date {raw:?}: {reason}")]
    InvalidDate { raw: String, reason: String },

    #[error("block contains {marker:?} but no entries matched")]
    NoMatches { marker: &'static str },

    #[error("could not decode {field}: {reason}")]
    Decode { field: &'static str, reason: String },

    #[error("empty title")]
    EmptyTitle,
}
