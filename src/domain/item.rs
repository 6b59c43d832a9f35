use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub pub_date: DateTime<Utc>,
}

impl FeedItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            pub_date,
        }
    }

    /// Entry identifier used for `<guid>`.
    ///
    /// This is the title, so two entries sharing a title share a guid.
    pub fn guid(&self) -> &str {
        &self.title
    }

    /// Display title for chart entries: "Artist – Song".
    pub fn chart_title(artist: &str, song: &str) -> String {
        format!("{} – {}", artist.trim(), song.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_guid_is_title() {
        let item = FeedItem::new(
            "Estreno: Nuevo single",
            "https://example.com/estreno",
            Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(),
        );
        assert_eq!(item.guid(), "Estreno: Nuevo single");
    }

    #[test]
    fn test_chart_title_uses_en_dash() {
        assert_eq!(
            FeedItem::chart_title(" Mon Laferte ", "Tu Falta De Querer"),
            "Mon Laferte – Tu Falta De Querer"
        );
    }
}
