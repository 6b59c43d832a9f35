use std::path::PathBuf;

use tracing::debug;

use crate::domain::{ExtractorKind, FeedConfig};
use crate::errors::{FeedError, FeedResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub user_agent: String,
    pub release_chart_url: Option<String>,
    pub top_chart_url: Option<String>,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FeedResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let output_dir = std::env::var("CHARTFEED_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let user_agent = std::env::var("CHARTFEED_USER_AGENT")
            .unwrap_or_else(|_| format!("chartfeed/{}", env!("CARGO_PKG_VERSION")));
        if user_agent.trim().is_empty() {
            return Err(FeedError::Config("CHARTFEED_USER_AGENT is empty".to_string()));
        }

        Ok(Self {
            output_dir,
            user_agent,
            release_chart_url: optional_var("RELEASE_CHART_URL"),
            top_chart_url: optional_var("TOP_CHART_URL"),
        })
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }

    /// The feed table, in the order feeds are generated.
    ///
    /// The chart API feeds are only listed when their endpoint is configured.
    pub fn feeds(&self) -> Vec<FeedConfig> {
        let mut feeds = vec![
            FeedConfig::new(
                "radioactiva",
                "estrenos_radioactivos.xml",
                "https://www.radioactiva.cl/?s=Estrenos+RadioActivos",
                "Estrenos RadioActivos",
                "Últimos estrenos musicales publicados en RadioActiva",
                ExtractorKind::Radioactiva,
            ),
            FeedConfig::new(
                "los40",
                "lista40.xml",
                "https://los40.cl/lista40/",
                "Lista Los40 Chile",
                "Ranking musical semanal de Los40 Chile",
                ExtractorKind::Los40,
            ),
        ];

        match &self.release_chart_url {
            Some(url) => feeds.push(FeedConfig::new(
                "releases",
                "releases.xml",
                url.as_str(),
                "Nuevos lanzamientos",
                "Últimos lanzamientos musicales",
                ExtractorKind::ReleaseChart,
            )),
            None => debug!("RELEASE_CHART_URL not set, skipping releases feed"),
        }

        match &self.top_chart_url {
            Some(url) => feeds.push(FeedConfig::new(
                "top",
                "top.xml",
                url.as_str(),
                "Top canciones",
                "Canciones más escuchadas de la semana",
                ExtractorKind::TopChart,
            )),
            None => debug!("TOP_CHART_URL not set, skipping top feed"),
        }

        feeds
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Look up a feed by key, ignoring case.
pub fn find_feed<'a>(feeds: &'a [FeedConfig], name: &str) -> FeedResult<&'a FeedConfig> {
    let name = name.to_lowercase();
    feeds
        .iter()
        .find(|f| f.key == name)
        .ok_or(FeedError::UnknownFeed(name))
}

/// Comma-separated feed keys, for error messages.
pub fn feed_keys(feeds: &[FeedConfig]) -> String {
    feeds
        .iter()
        .map(|f| f.key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
