// src/core/sanitize.rs

/// Trimmed text, or `None` when nothing is left.
pub fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

/// Drop the first `label` occurrence ("Phone: ") and trim the rest.
pub fn strip_label(line: &str, label: &str) -> String {
    s!(line.replacen(label, "", 1).trim())
}

/// Mailing-address cells are indented with tab pairs; drop them.
pub fn strip_double_tabs(s: &str) -> String {
    s.replace("\t\t", "")
}

/// `...?id=1234&session=2023` → `1234`. First `id=` wins, value ends at `&`.
pub fn query_id(href: &str) -> Option<&str> {
    let (_, rest) = href.split_once("id=")?;
    rest.split('&').next().filter(|id| !id.is_empty())
}
