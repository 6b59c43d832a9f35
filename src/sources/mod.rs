pub mod traits;
pub mod extraction;
pub mod fetch;
pub mod chart;
pub mod radioactiva;
pub mod los40;
pub mod release_chart;
pub mod top_chart;
pub mod registry;

pub use traits::{Extractor, Fetcher, Source, SourceContent};
pub use extraction::Extraction;
pub use fetch::HttpFetcher;
pub use registry::ExtractorRegistry;
