// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Starting year of the legislative session (e.g. 2023 for 2023-2024).
    pub session: u32,
    /// Max simultaneous in-flight fetches.
    pub workers: usize,
    /// Scheme + host, no trailing slash. Overridden by tests.
    pub base_url: String,
    pub out_dir: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            session: DEFAULT_SESSION,
            workers: WORKERS,
            base_url: s!(BASE_URL),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ScrapeOptions {
    pub fn for_session(session: u32) -> Self {
        Self { session, ..Self::default() }
    }

    /// Listing page for one shard key (`A`..`Z` or `0`).
    pub fn listing_url(&self, shard: char) -> String {
        format!(
            "{}{}?letter={}&session={}",
            self.base_url.trim_end_matches('/'), LIST_PATH, shard, self.session
        )
    }

    pub fn detail_url(&self, id: &str) -> String {
        format!(
            "{}{}?id={}&session={}",
            self.base_url.trim_end_matches('/'), DETAIL_PATH, id, self.session
        )
    }

    /// `<out_dir>/lobbyists-<session>.json`, one file per session.
    pub fn out_path(&self) -> PathBuf {
        self.out_dir
            .join(format!("{OUT_FILE_PREFIX}{}.{OUT_FILE_EXT}", self.session))
    }

    /// `2023-2024` for session 2023.
    pub fn session_label(&self) -> String {
        format!("{}-{}", self.session, self.session.saturating_add(1))
    }

    pub fn shards() -> impl Iterator<Item = char> {
        SHARDS.chars()
    }
}
