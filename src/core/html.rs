// src/core/html.rs
// Small helpers over `scraper` so the specs read like the page they parse.

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::structure(format!("bad selector `{css}`: {e}")))
}

/// DOM `textContent`: every descendant text node, concatenated as-is.
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// All descendants of `el` matching `css`, in document order.
pub fn select_all<'a>(el: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(el.select(&sel).collect())
}

/// Positional access that reports what was missing instead of panicking.
pub fn nth<'a>(items: &[ElementRef<'a>], i: usize, what: &str) -> Result<ElementRef<'a>> {
    items.get(i).copied().ok_or_else(|| {
        ScrapeError::structure(format!("{what}: wanted index {i}, found {}", items.len()))
    })
}
