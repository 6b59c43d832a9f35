use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::domain::{FeedConfig, SourceFormat};
use crate::errors::{FeedError, FeedResult};
use crate::services::assembler::FeedAssembler;
use crate::sources::{ExtractorRegistry, Fetcher, Source};

/// Outcome of one successfully written feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRun {
    pub key: String,
    pub path: PathBuf,
    pub items: usize,
    pub skipped: usize,
}

/// Progress of a batch, reported as each feed starts and finishes.
#[derive(Debug)]
pub enum FeedProgress<'a> {
    Started(&'a FeedConfig),
    Written(&'a FeedRun),
    Failed(&'a str, &'a FeedError),
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<FeedRun>,
    pub failed: Vec<(String, FeedError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct FeedService<F: Fetcher> {
    fetcher: F,
    registry: ExtractorRegistry,
    assembler: FeedAssembler,
}

impl<F: Fetcher> FeedService<F> {
    pub fn new(fetcher: F, registry: ExtractorRegistry, assembler: FeedAssembler) -> Self {
        Self {
            fetcher,
            registry,
            assembler,
        }
    }

    /// Fetch, extract, assemble and write a single feed
    pub fn run(&self, feed: &FeedConfig) -> FeedResult<FeedRun> {
        let extractor = self.registry.get(feed.extractor)?;

        let source = match extractor.format() {
            SourceFormat::Html => Source::html(&feed.url, self.fetcher.fetch_text(&feed.url)?),
            SourceFormat::Json => Source::json(&feed.url, self.fetcher.fetch_json(&feed.url)?),
        };

        let (items, failures) = extractor.extract(&source)?.into_parts();
        for failure in &failures {
            warn!(feed = %feed.key, error = %failure, "Skipped record");
        }

        let document = self.assembler.assemble(feed, items);
        let path = self.assembler.write(feed, &document)?;

        info!(
            feed = %feed.key,
            items = document.len(),
            skipped = failures.len(),
            path = %path.display(),
            "Feed written"
        );

        Ok(FeedRun {
            key: feed.key.clone(),
            path,
            items: document.len(),
            skipped: failures.len(),
        })
    }

    /// Run every feed in order; one feed failing does not stop the rest.
    ///
    /// `on_progress` sees each feed start and then its outcome before the
    /// next feed begins.
    pub fn run_all<P>(&self, feeds: &[FeedConfig], mut on_progress: P) -> BatchReport
    where
        P: FnMut(FeedProgress<'_>),
    {
        let mut report = BatchReport::default();

        for feed in feeds {
            on_progress(FeedProgress::Started(feed));
            match self.run(feed) {
                Ok(run) => {
                    on_progress(FeedProgress::Written(&run));
                    report.written.push(run);
                }
                Err(e) => {
                    error!(feed = %feed.key, error = %e, "Feed failed");
                    on_progress(FeedProgress::Failed(&feed.key, &e));
                    report.failed.push((feed.key.clone(), e));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExtractorKind;
    use crate::sources::traits::MockFetcher;
    use mockall::predicate::eq;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    const RADIOACTIVA_PAGE: &str = r#"<html><body>
<article><a href="https://www.radioactiva.cl/uno/"><h1 class="fjalla">Estreno uno</h1></a><small class="date-post">15 marzo, 2024</small></article>
<article><a href="https://www.radioactiva.cl/dos/"><h1 class="fjalla">Estreno dos</h1></a></article>
<article><a href="https://www.radioactiva.cl/tres/"><h1 class="fjalla">Estreno tres</h1></a><small class="date-post">2 abril, 2024</small></article>
</body></html>"#;

    fn radioactiva() -> FeedConfig {
        FeedConfig::new(
            "radioactiva",
            "estrenos_radioactivos.xml",
            "https://www.radioactiva.cl/?s=Estrenos+RadioActivos",
            "Estrenos RadioActivos",
            "Últimos estrenos musicales publicados en RadioActiva",
            ExtractorKind::Radioactiva,
        )
    }

    fn top() -> FeedConfig {
        FeedConfig::new(
            "top",
            "top.xml",
            "https://api.example.com/top",
            "Top",
            "Top songs",
            ExtractorKind::TopChart,
        )
    }

    fn releases() -> FeedConfig {
        FeedConfig::new(
            "releases",
            "releases.xml",
            "https://api.example.com/releases",
            "Releases",
            "New releases",
            ExtractorKind::ReleaseChart,
        )
    }

    fn service(fetcher: MockFetcher, dir: &TempDir) -> FeedService<MockFetcher> {
        FeedService::new(fetcher, ExtractorRegistry::new(), FeedAssembler::new(dir.path()))
    }

    #[test]
    fn test_run_html_feed_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_text()
            .with(eq("https://www.radioactiva.cl/?s=Estrenos+RadioActivos"))
            .times(1)
            .returning(|_| Ok(RADIOACTIVA_PAGE.to_string()));
        fetcher.expect_fetch_json().never();

        let run = service(fetcher, &dir).run(&radioactiva()).unwrap();

        assert_eq!(run.items, 2);
        assert_eq!(run.skipped, 1);
        assert_eq!(run.path, dir.path().join("estrenos_radioactivos.xml"));

        let xml = fs::read_to_string(&run.path).unwrap();
        assert_eq!(xml.matches("<item>").count(), 2);
        assert!(xml.contains("https://www.radioactiva.cl/uno/"));
        assert!(!xml.contains("Estreno dos"));
    }

    #[test]
    fn test_run_json_feed_uses_fetch_json() {
        let dir = TempDir::new().unwrap();
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch_text().never();
        fetcher
            .expect_fetch_json()
            .times(1)
            .returning(|_| Ok(json!({"data": [{"title": "Flowers", "artists": "Miley Cyrus"}]})));

        let run = service(fetcher, &dir).run(&top()).unwrap();

        assert_eq!(run.items, 1);
        let xml = fs::read_to_string(&run.path).unwrap();
        let expected = format!("<pubDate>{}</pubDate>", crate::dates::fixed_pub_date().to_rfc2822());
        assert!(xml.contains(&expected));
    }

    #[test]
    fn test_fetch_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch_json().returning(|url| {
            Err(FeedError::Status {
                url: url.to_string(),
                status: 503,
            })
        });

        let result = service(fetcher, &dir).run(&top());

        assert!(matches!(result, Err(FeedError::Status { status: 503, .. })));
        assert!(!dir.path().join("top.xml").exists());
    }

    #[test]
    fn test_run_all_isolates_failing_feed() {
        let dir = TempDir::new().unwrap();
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_text()
            .returning(|_| Ok(RADIOACTIVA_PAGE.to_string()));
        fetcher
            .expect_fetch_json()
            .with(eq("https://api.example.com/releases"))
            .returning(|_| Ok(json!({"unexpected": true})));
        fetcher
            .expect_fetch_json()
            .with(eq("https://api.example.com/top"))
            .returning(|_| Ok(json!({"data": [{"title": "Houdini", "artists": "Dua Lipa"}]})));

        let report = service(fetcher, &dir).run_all(&[radioactiva(), releases(), top()], |_| {});

        let written: Vec<&str> = report.written.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(written, vec!["radioactiva", "top"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "releases");
        assert!(matches!(report.failed[0].1, FeedError::Parse(_)));
        assert!(!report.is_success());
        assert!(dir.path().join("top.xml").exists());
    }

    #[test]
    fn test_run_all_empty() {
        let dir = TempDir::new().unwrap();
        let report = service(MockFetcher::new(), &dir).run_all(&[], |_| {});
        assert!(report.written.is_empty());
        assert!(report.is_success());
    }

    #[test]
    fn test_run_all_reports_each_feed_before_the_next_starts() {
        let dir = TempDir::new().unwrap();
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch_json()
            .with(eq("https://api.example.com/releases"))
            .returning(|_| Ok(json!({"unexpected": true})));
        fetcher
            .expect_fetch_json()
            .with(eq("https://api.example.com/top"))
            .returning(|_| Ok(json!({"data": []})));

        let mut events = Vec::new();
        service(fetcher, &dir).run_all(&[releases(), top()], |progress| {
            events.push(match progress {
                FeedProgress::Started(feed) => format!("start {}", feed.key),
                FeedProgress::Written(run) => format!("written {}", run.key),
                FeedProgress::Failed(key, _) => format!("failed {}", key),
            })
        });

        assert_eq!(
            events,
            vec!["start releases", "failed releases", "start top", "written top"]
        );
    }
}
