// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://cal-access.sos.ca.gov";
pub const LIST_PATH: &str = "/Lobbying/Lobbyists/list.aspx";
pub const DETAIL_PATH: &str = "/Lobbying/Lobbyists/Detail.aspx";
pub const USER_AGENT: &str = concat!("lobbyist_scrape/", env!("CARGO_PKG_VERSION"));

// Index shards: A..Z plus the "0" catch-all
pub const SHARDS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0";
pub const DEFAULT_SESSION: u32 = 2023;

// Detail page layout: chrome tables before the data sections
pub const LEADING_BOILERPLATE_TABLES: usize = 7;

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const OUT_FILE_PREFIX: &str = "lobbyists-";
pub const OUT_FILE_EXT: &str = "json";

// Concurrency
pub const WORKERS: usize = 4;
