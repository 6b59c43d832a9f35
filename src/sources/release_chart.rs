use serde::Deserialize;
use serde_json::Value;

use crate::dates;
use crate::domain::{ExtractorKind, FeedItem, SourceFormat};
use crate::errors::{ExtractionError, FeedResult};
use crate::sources::chart::{self, NO_TITLE, UNKNOWN_ARTIST};
use crate::sources::extraction::Extraction;
use crate::sources::traits::{Extractor, Source};

#[derive(Debug, Deserialize)]
struct ReleaseRecord {
    #[serde(default)]
    artist: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    releasedate: Option<String>,
}

/// New releases API: `{"data": [{"artist", "title", "releasedate"}]}`.
///
/// A record whose release date is missing or matches neither known format is
/// skipped.
pub struct ReleaseChartExtractor;

impl ReleaseChartExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_record(value: &Value) -> Result<FeedItem, ExtractionError> {
        let record = ReleaseRecord::deserialize(value).map_err(|e| ExtractionError::Decode {
            field: "record",
            reason: e.to_string(),
        })?;

        let artist = chart::or_default(record.artist, UNKNOWN_ARTIST);
        let title = chart::or_default(record.title, NO_TITLE);
        let raw_date = record
            .releasedate
            .ok_or(ExtractionError::MissingField("releasedate"))?;
        let pub_date = dates::parse_release_date(&raw_date)?;
        let link = chart::search_link(&artist, &title)?;

        Ok(FeedItem::new(FeedItem::chart_title(&artist, &title), link, pub_date))
    }
}

impl Default for ReleaseChartExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for ReleaseChartExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::ReleaseChart
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn extract(&self, source: &Source) -> FeedResult<Extraction> {
        let body = source.as_json(self.kind())?;

        Ok(chart::records(body, self.kind())?
            .iter()
            .map(Self::extract_record)
            .collect())
    }
}
