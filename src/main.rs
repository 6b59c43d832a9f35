use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use chartfeed::cli::Cli;
use chartfeed::config::{feed_keys, find_feed, Config};
use chartfeed::errors::FeedError;
use chartfeed::services::{FeedAssembler, FeedProgress, FeedService};
use chartfeed::sources::{ExtractorRegistry, HttpFetcher};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether every selected feed was written.
fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    let config = Config::from_env()
        .context("loading configuration")?
        .with_output_dir(cli.output_dir);
    debug!(output_dir = %config.output_dir.display(), "Loaded configuration");

    let feeds = config.feeds();
    let selected = match cli.feed.as_deref() {
        Some(name) => match find_feed(&feeds, name) {
            Ok(feed) => vec![feed.clone()],
            Err(FeedError::UnknownFeed(name)) => {
                println!(
                    "Unknown feed: {}. Valid options: {}",
                    name,
                    feed_keys(&feeds)
                );
                return Ok(true);
            }
            Err(e) => return Err(e.into()),
        },
        None => feeds,
    };

    let service = FeedService::new(
        HttpFetcher::new(&config.user_agent),
        ExtractorRegistry::new(),
        FeedAssembler::new(&config.output_dir),
    );

    let batch = cli.feed.is_none();
    let report = service.run_all(&selected, |progress| match progress {
        FeedProgress::Started(feed) if batch => println!("Generating feed: {}", feed.key),
        FeedProgress::Started(_) => {}
        FeedProgress::Written(run) => println!("RSS generated: {}", run.path.display()),
        FeedProgress::Failed(key, e) => println!("Failed to generate {}: {}", key, e),
    });

    Ok(report.is_success())
}
