// src/scrape/scrape.rs
use std::{path::PathBuf, sync::Arc};

use tracing::{error, info, warn};

use crate::{
    config::{consts::SHARDS, options::ScrapeOptions},
    core::net::Fetch,
    data::LobbyistRecord,
    error::Result,
    progress::Progress,
    specs::{detail, index},
    store,
};

use super::pool::Pool;

/// How a full run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Phase 1 found nobody. Treated as a broken site/network; nothing written.
    Empty,
    Written { path: PathBuf, records: usize },
}

/// Both phases, then sort and save.
pub async fn run(
    fetcher: Arc<dyn Fetch>,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunOutcome> {
    info!("Scraping for the {} session", opts.session_label());

    let records = collect_index(Arc::clone(&fetcher), opts, reborrow(&mut progress)).await?;
    if records.is_empty() {
        warn!("Found zero lobbyists - something is off, not saving anything");
        return Ok(RunOutcome::Empty);
    }

    let mut records = collect_details(fetcher, opts, records, reborrow(&mut progress)).await;

    info!("Sorting");
    store::sort_records(&mut records);

    let path = opts.out_path();
    info!("Saving to {}", path.display());
    store::save(&path, &records)?;

    info!("All done");
    Ok(RunOutcome::Written { path, records: records.len() })
}

// Shortens the trait-object lifetime so the sink can be lent out once per phase.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_deref_mut().map(|p| -> &mut dyn Progress { p })
}

/// Phase 1: every index shard. Any shard failure fails the phase, after all
/// shards have finished. Records come back in shard order.
pub async fn collect_index(
    fetcher: Arc<dyn Fetch>,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<LobbyistRecord>> {
    let shards: Vec<char> = ScrapeOptions::shards().collect();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(shards.len());
        p.log("Fetching index shards…");
    }

    let opts = Arc::new(opts.clone());
    let pool = Pool::new(opts.workers);
    for shard in shards {
        let fetcher = Arc::clone(&fetcher);
        let opts = Arc::clone(&opts);
        pool.submit(async move { (shard, index::fetch(fetcher.as_ref(), &opts, shard).await) });
    }

    let mut per_shard = pool
        .drain_with(|(shard, res)| {
            let key = shard.to_string();
            match res {
                Ok(found) => {
                    info!(shard = %shard, found = found.len(), "Shard done");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&key);
                    }
                }
                Err(e) => {
                    error!(shard = %shard, "Error scraping shard {shard}: {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&key, &e.to_string());
                    }
                }
            }
        })
        .await;

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    per_shard.sort_by_key(|(shard, _)| SHARDS.find(*shard));
    let mut records = Vec::new();
    for (_, res) in per_shard {
        records.extend(res?);
    }
    Ok(records)
}

/// Phase 2: one detail fetch per record. Failures are logged and the record
/// keeps its index-phase id/name; nothing is dropped.
pub async fn collect_details(
    fetcher: Arc<dyn Fetch>,
    opts: &ScrapeOptions,
    mut records: Vec<LobbyistRecord>,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<LobbyistRecord> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(records.len());
        p.log("Fetching lobbyist details…");
    }

    let opts = Arc::new(opts.clone());
    let pool = Pool::new(opts.workers);
    // Each task owns one slot index, so no two tasks ever target the same record.
    for (slot, rec) in records.iter().enumerate() {
        let fetcher = Arc::clone(&fetcher);
        let opts = Arc::clone(&opts);
        let id = rec.id.clone();
        pool.submit(async move {
            let res = detail::fetch(fetcher.as_ref(), &opts, &id).await;
            (slot, id, res)
        });
    }

    let outcomes = pool
        .drain_with(|(_, id, res)| match res {
            Ok(_) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id);
                }
            }
            Err(e) => {
                error!(id = %id, "Error scraping info for {id}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id, &e.to_string());
                }
            }
        })
        .await;

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    for (slot, _, res) in outcomes {
        if let Ok(detail) = res {
            records[slot].merge(detail);
        }
    }
    records
}
