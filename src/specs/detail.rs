// src/specs/detail.rs
// Per-lobbyist detail page → LobbyistDetail.
//
// Each section is optional; a missing marker table leaves its fields absent.
// A section that is found but malformed fails the whole page.

use scraper::Html;
use tracing::info;

use crate::config::options::ScrapeOptions;
use crate::core::net::Fetch;
use crate::data::LobbyistDetail;
use crate::error::Result;
use super::sections::{self, DataTables, Section};

pub async fn fetch(fetcher: &dyn Fetch, opts: &ScrapeOptions, id: &str) -> Result<LobbyistDetail> {
    info!("Scraping lobbyist info for {id}");
    let html = fetcher.fetch(&opts.detail_url(id)).await?;
    parse(&html)
}

pub fn parse(html: &str) -> Result<LobbyistDetail> {
    let doc = Html::parse_document(html);
    let tables = DataTables::from_document(&doc)?;
    let mut detail = LobbyistDetail::default();

    if let Some(tb) = tables.locate(Section::Address) {
        let block = sections::read_address(tb)?;
        detail.address = Some(block.address);
        detail.phone = block.phone;
        detail.email = block.email;
    }

    if let Some(tb) = tables.locate(Section::MailingAddress) {
        detail.mailing_address = Some(sections::read_mailing_address(tb)?);
    }

    if let Some(tb) = tables.locate(Section::EthicsRegistration) {
        let reg = sections::read_registration(tb)?;
        detail.ethics_course_completion_date = reg.ethics_course_completion_date;
        detail.registration_date = Some(reg.registration_date);
        detail.status = Some(reg.status);
    }

    if let Some(tb) = tables.locate(Section::Relationships) {
        detail.relationships = sections::read_relationships(tb)?;
    }

    Ok(detail)
}
