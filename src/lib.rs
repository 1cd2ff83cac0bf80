// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod log;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::{LobbyistDetail, LobbyistRecord, RelationshipRecord};
pub use error::ScrapeError;
