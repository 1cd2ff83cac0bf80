// src/scrape/mod.rs
mod pool;
mod scrape;

pub use pool::{Pool, Submitter};
pub use scrape::{RunOutcome, collect_details, collect_index, run};
