//! Latest command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::fetcher::VideoListFetcher;
use crate::youtube::YouTubeClient;
use anyhow::Result;

/// Run the latest command: one lookup, report to stdout.
pub async fn run_latest(limit: i64, settings: Settings) -> Result<()> {
    let client = YouTubeClient::new(settings.youtube.resolve_api_key());
    let fetcher = VideoListFetcher::new(client);

    let spinner = Output::spinner("Fetching latest CS50 videos...");
    let report = fetcher.fetch(limit).await;
    spinner.finish_and_clear();

    println!("{}", report);

    Ok(())
}
