use super::{FeedConfig, FeedItem};

/// An RSS channel ready to be rendered.
///
/// Built fresh for every run; the previous file on disk is never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub title: String,
    pub link: String,
    pub description: String,
    pub items: Vec<FeedItem>,
}

impl FeedDocument {
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            title: config.title.clone(),
            link: config.url.clone(),
            description: config.description.clone(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<FeedItem>) -> Self {
        self.items = items;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
