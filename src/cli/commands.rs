use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chartfeed")]
#[command(about = "Scrapes music release and chart pages into RSS feeds")]
#[command(version)]
pub struct Cli {
    /// Feed to generate (all configured feeds when omitted)
    pub feed: Option<String>,

    /// Directory the feed files are written to
    #[arg(short, long, env = "CHARTFEED_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["chartfeed"]);
        assert!(cli.feed.is_none());
    }

    #[test]
    fn test_feed_and_output_dir() {
        let cli = Cli::parse_from(["chartfeed", "los40", "-o", "/tmp/feeds"]);
        assert_eq!(cli.feed.as_deref(), Some("los40"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/feeds")));
    }
}
