use crate::domain::ExtractorKind;
use crate::errors::{FeedError, FeedResult};
use crate::sources::traits::Extractor;
use crate::sources::{
    los40::Los40Extractor, radioactiva::RadioactivaExtractor,
    release_chart::ReleaseChartExtractor, top_chart::TopChartExtractor,
};

pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn Extractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(Box::new(RadioactivaExtractor::new()));
        registry.register(Box::new(Los40Extractor::new()));
        registry.register(Box::new(ReleaseChartExtractor::new()));
        registry.register(Box::new(TopChartExtractor::new()));

        registry
    }

    pub fn empty() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Add an extractor; a later registration for the same kind wins.
    pub fn register(&mut self, extractor: Box<dyn Extractor>) {
        self.extractors.retain(|e| e.kind() != extractor.kind());
        self.extractors.push(extractor);
    }

    pub fn get(&self, kind: ExtractorKind) -> FeedResult<&dyn Extractor> {
        self.extractors
            .iter()
            .find(|e| e.kind() == kind)
            .map(|e| e.as_ref())
            .ok_or_else(|| FeedError::Config(format!("No extractor registered for {}", kind)))
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceFormat;

    #[test]
    fn test_every_kind_is_registered() {
        let registry = ExtractorRegistry::new();

        for kind in [
            ExtractorKind::Radioactiva,
            ExtractorKind::Los40,
            ExtractorKind::ReleaseChart,
            ExtractorKind::TopChart,
        ] {
            let extractor = registry.get(kind).unwrap();
            assert_eq!(extractor.kind(), kind);
        }
    }

    #[test]
    fn test_formats_match_sources() {
        let registry = ExtractorRegistry::new();

        assert_eq!(registry.get(ExtractorKind::Radioactiva).unwrap().format(), SourceFormat::Html);
        assert_eq!(registry.get(ExtractorKind::Los40).unwrap().format(), SourceFormat::Html);
        assert_eq!(registry.get(ExtractorKind::ReleaseChart).unwrap().format(), SourceFormat::Json);
        assert_eq!(registry.get(ExtractorKind::TopChart).unwrap().format(), SourceFormat::Json);
    }

    #[test]
    fn test_empty_registry_reports_missing_kind() {
        let registry = ExtractorRegistry::empty();
        assert!(matches!(
            registry.get(ExtractorKind::Los40),
            Err(FeedError::Config(_))
        ));
    }

    #[test]
    fn test_register_replaces_same_kind() {
        let mut registry = ExtractorRegistry::new();
        registry.register(Box::new(Los40Extractor::new()));
        assert_eq!(registry.extractors.len(), 4);
    }
}
