// src/error.rs
use std::io;

use thiserror::Error;

/// Everything that can go wrong between the request and the output file.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    /// The page parsed but didn't have the shape the extractor relies on.
    #[error("unexpected page structure: {0}")]
    Structure(String),

    #[error("could not write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

impl ScrapeError {
    pub fn structure(what: impl Into<String>) -> Self {
        Self::Structure(what.into())
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
