// tests/common/mod.rs
//
// Offline fixtures: page builders shaped like the live Cal-Access pages, and
// a fake site that serves them while counting in-flight requests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use lobbyist_scrape::config::options::ScrapeOptions;
use lobbyist_scrape::core::Fetch;
use lobbyist_scrape::ScrapeError;

pub const BASE: &str = "http://calaccess.test";

pub fn opts(out_dir: &std::path::Path) -> ScrapeOptions {
    ScrapeOptions {
        base_url: BASE.to_string(),
        out_dir: out_dir.to_path_buf(),
        ..ScrapeOptions::default()
    }
}

/* ---------------- page builders ---------------- */

pub fn listing_page(rows: &[(&str, &str)]) -> String {
    let mut body = String::from("<tr><th>Lobbyist</th></tr>");
    for (id, name) in rows {
        body.push_str(&format!(
            "<tr><td><a href=\"Detail.aspx?id={id}&amp;session=2023\">{name}</a></td></tr>"
        ));
    }
    format!(
        "<html><body><div id=\"nav\"><table><tr><td>menu</td></tr></table></div>\
         <table id=\"lobbyists\"><tbody>{body}</tbody></table></body></html>"
    )
}

/// Detail page: seven layout tables, then whichever sections were added.
#[derive(Default)]
pub struct DetailPage {
    sections: Vec<String>,
}

impl DetailPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(mut self, lines: &[&str]) -> Self {
        let mut cell = String::new();
        for l in lines {
            cell.push_str("\n\t\t");
            cell.push_str(l);
        }
        cell.push_str("\n\t");
        self.sections.push(format!(
            "<table><tr><td><b>ADDRESS</b></td></tr><tr><td>{cell}</td></tr></table>"
        ));
        self
    }

    pub fn mailing(mut self, lines: &[&str]) -> Self {
        let cell: String = lines.iter().map(|l| format!("\n\t\t{l}")).collect();
        self.sections.push(format!(
            "<table><tr><td><b>MAILING ADDRESS</b></td></tr><tr><td>{cell}\n\t</td></tr></table>"
        ));
        self
    }

    pub fn ethics(mut self, completed: &str, registered: &str, status: &str) -> Self {
        self.sections.push(format!(
            "<table><tr><td>ETHICS COURSE COMPLETION DATE</td><td>REGISTRATION DATE</td><td>STATUS</td></tr>\
             <tr><td>{completed}</td><td>{registered}</td><td>{status}</td></tr></table>"
        ));
        self
    }

    /// Rows of (entity, type, effective, termination).
    pub fn relationships(mut self, rows: &[[&str; 4]]) -> Self {
        let mut html = String::from(
            "<table><tr><td colspan=\"4\">LOBBYIST RELATIONSHIPS</td></tr>\
             <tr><td>NAME</td><td>TYPE</td><td>EFFECTIVE DATE</td><td>TERMINATION DATE</td></tr>",
        );
        for [a, b, c, d] in rows {
            html.push_str(&format!("<tr><td>{a}</td><td>{b}</td><td>{c}</td><td>{d}</td></tr>"));
        }
        html.push_str("</table>");
        self.sections.push(html);
        self
    }

    /// Raw section markup, for malformed cases.
    pub fn raw(mut self, html: &str) -> Self {
        self.sections.push(html.to_string());
        self
    }

    pub fn html(&self) -> String {
        let chrome: String = (0..7)
            .map(|i| format!("<table><tr><td>header {i} ADDRESS STATUS</td></tr></table>"))
            .collect();
        format!("<html><body>{chrome}{}</body></html>", self.sections.concat())
    }
}

/* ---------------- fake site ---------------- */

#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, Result<String, u16>>,
    live: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: String, body: String) -> Self {
        self.pages.insert(url, Ok(body));
        self
    }

    pub fn status(mut self, url: String, status: u16) -> Self {
        self.pages.insert(url, Err(status));
        self
    }

    /// Every shard gets an empty listing unless one was already registered.
    pub fn empty_shards(mut self, opts: &ScrapeOptions) -> Self {
        for shard in ScrapeOptions::shards() {
            self.pages
                .entry(opts.listing_url(shard))
                .or_insert_with(|| Ok(listing_page(&[])));
        }
        self
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetch for FakeSite {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(2)).await;
        self.live.fetch_sub(1, Ordering::SeqCst);

        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ScrapeError::Status { url: url.to_string(), status: *status }),
            None => Err(ScrapeError::Status { url: url.to_string(), status: 404 }),
        }
    }
}
