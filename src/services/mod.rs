pub mod assembler;
pub mod feed_service;

pub use assembler::FeedAssembler;
pub use feed_service::{BatchReport, FeedProgress, FeedRun, FeedService};
