use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::dates;
use crate::domain::{ExtractorKind, FeedItem, SourceFormat};
use crate::errors::{ExtractionError, FeedResult};
use crate::sources::extraction::Extraction;
use crate::sources::traits::{Extractor, Source};

static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h1.fjalla").unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse("small.date-post").unwrap());

/// Search results listing of radioactiva.cl.
///
/// Each `<article>` carries an `h1.fjalla` heading wrapped in the permalink
/// anchor and a `small.date-post` with a Spanish long date.
pub struct RadioactivaExtractor;

impl RadioactivaExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_article(article: ElementRef<'_>, base: Option<&Url>) -> Result<FeedItem, ExtractionError> {
        let heading = article
            .select(&TITLE)
            .next()
            .ok_or(ExtractionError::MissingElement("title"))?;

        let href = heading
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == "a")
            .and_then(|a| a.value().attr("href"))
            .ok_or(ExtractionError::MissingElement("link"))?;

        let raw_date = article
            .select(&DATE)
            .next()
            .map(collapse_text)
            .ok_or(ExtractionError::MissingElement("date"))?;

        let title = collapse_text(heading);
        if title.is_empty() {
            return Err(ExtractionError::EmptyTitle);
        }

        let link = match base.and_then(|b| b.join(href).ok()) {
            Some(resolved) => resolved.to_string(),
            None => href.to_string(),
        };
        let pub_date = dates::or_now(dates::parse_long_date(&raw_date), &title);

        Ok(FeedItem::new(title, link, pub_date))
    }
}

impl Default for RadioactivaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for RadioactivaExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Radioactiva
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Html
    }

    fn extract(&self, source: &Source) -> FeedResult<Extraction> {
        let html = source.as_html(self.kind())?;
        let base = Url::parse(&source.url).ok();
        let document = Html::parse_document(html);

        Ok(document
            .select(&ARTICLE)
            .map(|article| Self::extract_article(article, base.as_ref()))
            .collect())
    }
}

fn collapse_text(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}
