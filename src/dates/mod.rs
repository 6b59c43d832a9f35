//! Date normalization shared by the extractors.
//!
//! Every parser returns a UTC timestamp or an [`ExtractionError`]; the caller
//! decides whether that error skips the record or falls back via [`or_now`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::warn;

use crate::errors::ExtractionError;

/// Spanish month names and their English equivalents, as used by `%B`.
const SPANISH_MONTHS: &[(&str, &str)] = &[
    ("enero", "January"),
    ("febrero", "February"),
    ("marzo", "March"),
    ("abril", "April"),
    ("mayo", "May"),
    ("junio", "June"),
    ("julio", "July"),
    ("agosto", "August"),
    ("septiembre", "September"),
    ("setiembre", "September"),
    ("octubre", "October"),
    ("noviembre", "November"),
    ("diciembre", "December"),
];

/// Format of the long dates on article listings, after translation.
pub const LONG_DATE_FORMAT: &str = "%d %B, %Y";

/// UTC timestamp without offset, tried after RFC 3339.
pub const ZULU_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Release date formats for the release chart API, in the order they are tried.
pub const RELEASE_DATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

static MONTH_NAME: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<&str> = SPANISH_MONTHS.iter().map(|(es, _)| *es).collect();
    Regex::new(&format!(r"(?i)\b({})\b", names.join("|"))).expect("month pattern is valid")
});

/// Replace Spanish month names with English ones, leaving everything else intact.
pub fn translate_months(raw: &str) -> String {
    MONTH_NAME
        .replace_all(raw, |caps: &Captures| {
            let found = caps[1].to_lowercase();
            SPANISH_MONTHS
                .iter()
                .find(|(es, _)| *es == found)
                .map(|(_, en)| (*en).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Parse a long Spanish date such as "15 marzo, 2024" as midnight UTC.
pub fn parse_long_date(raw: &str) -> Result<DateTime<Utc>, ExtractionError> {
    let translated = translate_months(raw.trim());
    let date = NaiveDate::parse_from_str(&translated, LONG_DATE_FORMAT)
        .map_err(|e| invalid(raw, e))?;
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| invalid(raw, "midnight out of range"))
}

/// Parse an ISO-8601 timestamp with offset, falling back to `YYYY-MM-DDTHH:MM:SSZ`.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ExtractionError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, ZULU_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|e| invalid(raw, e))
}

/// Parse a release chart date, trying [`RELEASE_DATE_FORMATS`] in order.
pub fn parse_release_date(raw: &str) -> Result<DateTime<Utc>, ExtractionError> {
    let raw = raw.trim();
    let mut last_error = None;

    for format in RELEASE_DATE_FORMATS {
        match NaiveDateTime::parse_from_str(raw, format) {
            Ok(dt) => return Ok(dt.and_utc()),
            Err(e) => last_error = Some(e),
        }
    }

    Err(match last_error {
        Some(e) => invalid(raw, e),
        None => invalid(raw, "no formats configured"),
    })
}

/// Fall back to the current time when a date could not be parsed.
pub fn or_now(result: Result<DateTime<Utc>, ExtractionError>, context: &str) -> DateTime<Utc> {
    result.unwrap_or_else(|e| {
        warn!(%context, error = %e, "Unparseable date, using current time");
        Utc::now()
    })
}

/// Publication date stamped on every top chart entry: 2025-01-01T00:00:00Z.
pub fn fixed_pub_date() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn invalid(raw: &str, reason: impl std::fmt::Display) -> ExtractionError {
    ExtractionError::InvalidDate {
        raw: raw.to_string(),
        reason: reason.to_string(),
    }
}
