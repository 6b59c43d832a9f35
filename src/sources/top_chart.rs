use serde::Deserialize;
use serde_json::Value;

use crate::dates;
use crate::domain::{ExtractorKind, FeedItem, SourceFormat};
use crate::errors::{ExtractionError, FeedResult};
use crate::sources::chart::{self, NO_TITLE, UNKNOWN_ARTIST};
use crate::sources::extraction::Extraction;
use crate::sources::traits::{Extractor, Source};

#[derive(Debug, Deserialize)]
struct TopRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    artists: Option<Value>,
}

/// Top songs API: `{"data": [{"title", "artists"}]}`.
///
/// The API has no dates; every entry gets [`dates::fixed_pub_date`].
pub struct TopChartExtractor;

impl TopChartExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_record(value: &Value) -> Result<FeedItem, ExtractionError> {
        let record = TopRecord::deserialize(value).map_err(|e| ExtractionError::Decode {
            field: "record",
            reason: e.to_string(),
        })?;

        let artist = chart::or_default(record.artists.as_ref().and_then(artists_text), UNKNOWN_ARTIST);
        let title = chart::or_default(record.title, NO_TITLE);
        let link = chart::search_link(&artist, &title)?;

        Ok(FeedItem::new(
            FeedItem::chart_title(&artist, &title),
            link,
            dates::fixed_pub_date(),
        ))
    }
}

impl Default for TopChartExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for TopChartExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::TopChart
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

/// `artists` is either a plain string or a list of names / `{"name": ..}` objects.
fn artists_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(list) => {
            let names: Vec<&str> = list
                .iter()
                .filter_map(|a| a.as_str().or_else(|| a.get("name").and_then(Value::as_str)))
                .collect();
            Some(names.join(", "))
        }
        _ => None,
    }
}
