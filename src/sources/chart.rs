//! Helpers shared by the JSON chart extractors.

use serde_json::Value;
use url::Url;

use crate::domain::ExtractorKind;
use crate::errors::{ExtractionError, FeedError, FeedResult};

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const NO_TITLE: &str = "No Title";

const SEARCH_URL: &str = "https://www.google.com/search";

/// The `data` array of a chart response.
pub fn records(body: &Value, extractor: ExtractorKind) -> FeedResult<&[Value]> {
    body.get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| FeedError::Parse(format!("{}: response has no `data` array", extractor)))
}

/// Charts carry no links, so entries point at a web search for "artist title".
pub fn search_link(artist: &str, title: &str) -> Result<String, ExtractionError> {
    let query = format!("{} {}", artist, title);
    Url::parse_with_params(SEARCH_URL, &[("q", query.as_str())])
        .map(String::from)
        .map_err(|e| ExtractionError::Decode {
            field: "link",
            reason: e.to_string(),
        })
}

/// Use `value` unless it is missing or blank.
pub fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_requires_data_array() {
        let body = json!({"data": [{"title": "A"}, {"title": "B"}]});
        assert_eq!(records(&body, ExtractorKind::TopChart).unwrap().len(), 2);

        assert!(records(&json!({"items": []}), ExtractorKind::TopChart).is_err());
        assert!(records(&json!({"data": "nope"}), ExtractorKind::TopChart).is_err());
        assert!(records(&json!([1, 2]), ExtractorKind::TopChart).is_err());
    }

    #[test]
    fn test_search_link_escapes_query() {
        let link = search_link("Beyoncé", "Texas Hold 'Em & More").unwrap();
        assert!(link.starts_with("https://www.google.com/search?q="));

        let parsed = Url::parse(&link).unwrap();
        let (_, q) = parsed.query_pairs().next().unwrap();
        assert_eq!(q, "Beyoncé Texas Hold 'Em & More");
        assert!(!link.contains(' '));
        assert!(!link["https://www.google.com/search?q=".len()..].contains('&'));
    }

    #[test]
    fn test_or_default() {
        assert_eq!(or_default(Some(" Karol G ".into()), UNKNOWN_ARTIST), "Karol G");
        assert_eq!(or_default(Some("  ".into()), UNKNOWN_ARTIST), UNKNOWN_ARTIST);
        assert_eq!(or_default(None, NO_TITLE), NO_TITLE);
    }
}
