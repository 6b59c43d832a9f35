use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::dates;
use crate::domain::{ExtractorKind, FeedItem, SourceFormat};
use crate::errors::{ExtractionError, FeedResult};
use crate::sources::extraction::Extraction;
use crate::sources::traits::{Extractor, Source};

/// Only script blocks containing this text are scanned.
const MARKER: &str = "songTitle";

static SCRIPT: Lazy<Selector> = Lazy::new(|| Selector::parse("script").unwrap());

// The chart data is a JS object literal, not valid JSON, so entries are
// pulled out by pattern instead of being deserialized. An entry is one
// innermost `{...}` object; strings inside it may contain braces.
static OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\{(?:[^{}"]|"(?:[^"\\]|\\.)*")*\}"#).unwrap());

static SONG_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""songTitle"\s*:\s*"((?:[^"\\]|\\.)*)""#).unwrap());

static ARTIST_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""artistName"\s*:\s*"((?:[^"\\]|\\.)*)""#).unwrap());

static YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""youtubeUrl"\s*:\s*"(https://www\.youtube\.com/watch\?v=[\w-]+)""#).unwrap()
});

static CREATED_AT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""createdAt"\s*:\s*"([^"]*)""#).unwrap());

/// Weekly chart page of los40.cl, whose entries live in inline scripts.
pub struct Los40Extractor;

impl Los40Extractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every entry object of one script block.
    ///
    /// A block that carries the marker but holds no entry object is an error.
    /// Each entry is read only from its own object, so a broken entry is
    /// recorded as a failure and never borrows fields from its neighbours.
    fn extract_block(text: &str) -> Result<Extraction, ExtractionError> {
        let entries: Vec<&str> = OBJECT
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|object| SONG_TITLE.is_match(object))
            .collect();
        if entries.is_empty() {
            return Err(ExtractionError::NoMatches { marker: MARKER });
        }

        Ok(entries.into_iter().map(Self::entry).collect())
    }

    fn entry(object: &str) -> Result<FeedItem, ExtractionError> {
        let song = decode(field(&SONG_TITLE, object, "songTitle")?, "songTitle")?;
        let artist = decode(field(&ARTIST_NAME, object, "artistName")?, "artistName")?;
        let video_url = field(&YOUTUBE_URL, object, "youtubeUrl")?;
        if song.trim().is_empty() {
            return Err(ExtractionError::EmptyTitle);
        }

        let title = FeedItem::chart_title(&artist, &song);
        let pub_date = match CREATED_AT.captures(object) {
            Some(caps) => dates::or_now(dates::parse_timestamp(&caps[1]), &title),
            None => Utc::now(),
        };

        Ok(FeedItem::new(title, video_url, pub_date))
    }
}

fn field<'a>(
    pattern: &Regex,
    object: &'a str,
    name: &'static str,
) -> Result<&'a str, ExtractionError> {
    pattern
        .captures(object)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ExtractionError::MissingField(name))
}

impl Default for Los40Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for Los40Extractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Los40
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Html
    }

    fn extract(&self, source: &Source) -> FeedResult<Extraction> {
        let html = source.as_html(self.kind())?;
        let document = Html::parse_document(html);
        let mut extraction = Extraction::new();

        for (index, script) in document.select(&SCRIPT).enumerate() {
            let text: String = script.text().collect();
            if !text.contains(MARKER) {
                continue;
            }

            match Self::extract_block(&text) {
                Ok(block) => {
                    debug!(index, entries = block.items().len(), "Processed chart script");
                    extraction.extend(block);
                }
                Err(e) => {
                    warn!(index, error = %e, "Skipping chart script");
                    extraction.fail(e);
                }
            }
        }

        Ok(extraction)
    }
}

/// Undo JSON string escaping (`\u00e9`, `\"`, `\/`) on a captured value.
fn decode(raw: &str, field: &'static str) -> Result<String, ExtractionError> {
    serde_json::from_str::<String>(&format!("\"{}\"", raw))
        .map(|s| s.trim().to_string())
        .map_err(|e| ExtractionError::Decode {
            field,
            reason: e.to_string(),
        })
}
