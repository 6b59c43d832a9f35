use crate::domain::FeedItem;
use crate::errors::ExtractionError;

/// Partial results of one extraction run.
///
/// Every candidate record ends up either in `items` (in source order) or in
/// `failures`; a bad record never aborts the others.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    items: Vec<FeedItem>,
    failures: Vec<ExtractionError>,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: Result<FeedItem, ExtractionError>) {
        match result {
            Ok(item) => self.items.push(item),
            Err(e) => self.failures.push(e),
        }
    }

    pub fn fail(&mut self, error: ExtractionError) {
        self.failures.push(error);
    }

    pub fn extend(&mut self, other: Extraction) {
        self.items.extend(other.items);
        self.failures.extend(other.failures);
    }

    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn failures(&self) -> &[ExtractionError] {
        &self.failures
    }

    pub fn into_parts(self) -> (Vec<FeedItem>, Vec<ExtractionError>) {
        (self.items, self.failures)
    }
}

impl FromIterator<Result<FeedItem, ExtractionError>> for Extraction {
    fn from_iter<I: IntoIterator<Item = Result<FeedItem, ExtractionError>>>(iter: I) -> Self {
        let mut extraction = Extraction::new();
        for result in iter {
            extraction.record(result);
        }
        extraction
    }
}
