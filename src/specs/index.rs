// src/specs/index.rs
// Alphabetic listing page: one shard of the lobbyist index.
//
// The listing table (`#lobbyists`) opens with a header row; every row after it
// has the lobbyist's name in the first cell, linked to the detail page.

use scraper::Html;
use tracing::info;

use crate::config::options::ScrapeOptions;
use crate::core::html::{nth, select_all, selector, text_content};
use crate::core::net::Fetch;
use crate::core::sanitize::query_id;
use crate::data::LobbyistRecord;
use crate::error::{Result, ScrapeError};

const LISTING_TABLE: &str = "#lobbyists";

pub async fn fetch(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    shard: char,
) -> Result<Vec<LobbyistRecord>> {
    info!("Scraping lobbyists for {shard}");
    let html = fetcher.fetch(&opts.listing_url(shard)).await?;
    parse(&html).map_err(|e| match e {
        ScrapeError::Structure(msg) => ScrapeError::Structure(format!("shard {shard}: {msg}")),
        other => other,
    })
}

/// id + name pairs from a listing page. Any row that doesn't fit is an error.
pub fn parse(html: &str) -> Result<Vec<LobbyistRecord>> {
    let doc = Html::parse_document(html);
    let table = doc
        .select(&selector(LISTING_TABLE)?)
        .next()
        .ok_or_else(|| ScrapeError::structure("listing table #lobbyists not found"))?;

    let rows = select_all(table, "tbody tr")?;
    let mut out = Vec::with_capacity(rows.len().saturating_sub(1));

    for (i, row) in rows.into_iter().enumerate().skip(1) {
        let cells = select_all(row, "td")?;
        let first = nth(&cells, 0, "listing cells")?;

        let name = text_content(first);
        let name = name.trim();
        if name.is_empty() {
            return Err(ScrapeError::structure(format!("row {i}: empty name")));
        }

        let href = first
            .select(&selector("a")?)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| ScrapeError::structure(format!("row {i}: no detail link")))?;
        let id = query_id(href)
            .ok_or_else(|| ScrapeError::structure(format!("row {i}: no id in `{href}`")))?;

        out.push(LobbyistRecord::new(id, name));
    }
    Ok(out)
}
