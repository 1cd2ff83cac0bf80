// src/cli.rs
use std::sync::Arc;

use clap::Parser;

use crate::config::{consts::DEFAULT_SESSION, options::ScrapeOptions};
use crate::core::net::HttpFetcher;
use crate::error::Result;
use crate::progress::LogProgress;
use crate::scrape::{self, RunOutcome};

/// Scrape Cal-Access lobbyist registrations into `lobbyists-<session>.json`.
#[derive(Parser, Debug)]
#[command(name = "lobbyist_scrape", about)]
pub struct Args {
    /// Starting year of the legislative session (2023 → 2023-2024).
    #[arg(long, default_value_t = DEFAULT_SESSION)]
    pub session: u32,
}

pub async fn run(args: Args) -> Result<RunOutcome> {
    let opts = ScrapeOptions::for_session(args.session);
    let fetcher = Arc::new(HttpFetcher::new()?);
    let mut progress = LogProgress::default();
    scrape::run(fetcher, &opts, Some(&mut progress)).await
}
