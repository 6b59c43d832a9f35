/// What the fetcher has to hand an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Html,
    Json,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Html => "html",
            SourceFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractorKind {
    Radioactiva,
    Los40,
    ReleaseChart,
    TopChart,
}

impl ExtractorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractorKind::Radioactiva => "radioactiva",
            ExtractorKind::Los40 => "los40",
            ExtractorKind::ReleaseChart => "release_chart",
            ExtractorKind::TopChart => "top_chart",
        }
    }
}

impl std::fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the feed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub key: String,
    pub output_file: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub extractor: ExtractorKind,
}

impl FeedConfig {
    pub fn new(
        key: impl Into<String>,
        output_file: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        extractor: ExtractorKind,
    ) -> Self {
        Self {
            key: key.into(),
            output_file: output_file.into(),
            url: url.into(),
            title: title.into(),
            description: description.into(),
            extractor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_kind_display_matches_as_str() {
        assert_eq!(ExtractorKind::ReleaseChart.to_string(), "release_chart");
        assert_eq!(ExtractorKind::TopChart.to_string(), "top_chart");
        assert_eq!(SourceFormat::Json.as_str(), "json");
    }
}
