pub mod feed;
pub mod item;
pub mod document;

pub use feed::{ExtractorKind, FeedConfig, SourceFormat};
pub use item::FeedItem;
pub use document::FeedDocument;
