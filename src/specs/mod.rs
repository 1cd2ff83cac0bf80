// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications for Cal-Access. Each spec focuses on
//! one page and encodes *where the data lives in the HTML* and *how to pull it
//! out*.
//!
//! ## What lives here
//! - **Pure HTML parsing**: each page module's `parse` takes the page body as a
//!   `&str` and returns owned data. Nothing here awaits, so a parsed document
//!   never lives across a suspension point.
//! - **Section heuristics** (`sections`): detail-page tables are found by
//!   marker text (`ADDRESS`, `MAILING ADDRESS`, …) and read positionally.
//! - Thin `fetch` wrappers that pair a URL with its parser.
//!
//! ## What does **not** live here
//! - Concurrency, failure isolation, merging: see `scrape`.
//! - Sorting and the output file: see `store`.
//!
//! ## Conventions
//! - A missing *section* is not an error; the fields stay absent.
//! - A section that is present but shaped wrong (missing row or cell) is a
//!   `ScrapeError::Structure`, so the caller decides whether it is fatal.
//! - Specs are tested offline against inline fixtures.
pub mod detail;
pub mod index;
pub mod sections;
