use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use tracing::debug;

use crate::domain::{FeedConfig, FeedDocument, FeedItem};
use crate::errors::FeedResult;

static LAST_BUILD_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*<lastBuildDate>[^<]*</lastBuildDate>").unwrap());

/// Turns extracted items into RSS files under one output directory.
pub struct FeedAssembler {
    output_dir: PathBuf,
}

impl FeedAssembler {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_path(&self, config: &FeedConfig) -> PathBuf {
        self.output_dir.join(&config.output_file)
    }

    /// Build the channel for `config`, keeping items in extraction order.
    pub fn assemble(&self, config: &FeedConfig, items: Vec<FeedItem>) -> FeedDocument {
        FeedDocument::new(config).with_items(items)
    }

    /// Serialize to RSS 2.0 without `<lastBuildDate>`, so equal documents
    /// always produce equal bytes.
    pub fn render(&self, document: &FeedDocument) -> FeedResult<String> {
        let bytes = to_channel(document).write_to(Vec::new())?;
        let xml = String::from_utf8_lossy(&bytes);
        Ok(LAST_BUILD_DATE.replace_all(&xml, "").into_owned())
    }

    /// Render and overwrite the feed file, returning its path.
    pub fn write(&self, config: &FeedConfig, document: &FeedDocument) -> FeedResult<PathBuf> {
        let xml = self.render(document)?;
        let path = self.output_path(config);

        fs::create_dir_all(&self.output_dir)?;
        fs::write(&path, xml)?;
        debug!(path = %path.display(), items = document.len(), "Wrote feed");

        Ok(path)
    }
}

fn to_channel(document: &FeedDocument) -> Channel {
    let items: Vec<Item> = document.items.iter().map(to_item).collect();

    ChannelBuilder::default()
        .title(document.title.clone())
        .link(document.link.clone())
        .description(document.description.clone())
        .last_build_date(Some(Utc::now().to_rfc2822()))
        .items(items)
        .build()
}

fn to_item(item: &FeedItem) -> Item {
    let guid = GuidBuilder::default()
        .value(item.guid().to_string())
        .permalink(false)
        .build();

    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(item.link.clone()))
        .pub_date(Some(item.pub_date.to_rfc2822()))
        .guid(Some(guid))
        .build()
}
