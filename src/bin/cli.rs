// src/bin/cli.rs
use clap::Parser;
use lobbyist_scrape::{cli, log};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();
    cli::run(cli::Args::parse()).await?;
    Ok(())
}
