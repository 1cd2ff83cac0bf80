// src/specs/sections.rs
//! Best-effort heuristics for the lobbyist detail page.
//!
//! The page is a stack of layout tables. After the leading chrome, each data
//! section sits in its own `<tbody>` and is recognised only by marker text in
//! its markup. Once found, rows and cells are read by position.
//!
//! These rules follow the page as it is currently published. When Cal-Access
//! changes the layout, this is the file to change.

use scraper::{ElementRef, Html};

use crate::config::consts::LEADING_BOILERPLATE_TABLES;
use crate::core::html::{nth, select_all, selector, text_content};
use crate::core::sanitize::{non_blank, strip_double_tabs, strip_label};
use crate::data::RelationshipRecord;
use crate::error::Result;

/// Address lines are separated by a newline followed by two tabs.
const ADDRESS_LINE_SEP: &str = "\n\t\t";
/// Relationship tables open with a caption row and a column header row.
const RELATIONSHIP_HEADER_ROWS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Address,
    MailingAddress,
    EthicsRegistration,
    Relationships,
}

impl Section {
    /// Marker test against a table body's raw inner HTML.
    pub fn matches(self, inner_html: &str) -> bool {
        match self {
            // "MAILING ADDRESS" contains "ADDRESS"; exclude it explicitly.
            Section::Address => {
                inner_html.contains("ADDRESS") && !inner_html.contains("MAILING ADDRESS")
            }
            Section::MailingAddress => inner_html.contains("MAILING ADDRESS"),
            Section::EthicsRegistration => inner_html.contains("ETHICS COURSE COMPLETION DATE"),
            Section::Relationships => inner_html.contains("LOBBYIST RELATIONSHIPS"),
        }
    }
}

/// Table bodies that may hold data sections, with their markup cached so each
/// marker search is a plain substring scan.
pub struct DataTables<'a> {
    bodies: Vec<(ElementRef<'a>, String)>,
}

impl<'a> DataTables<'a> {
    /// Every `<tbody>` in document order, minus the leading chrome.
    pub fn from_document(doc: &'a Html) -> Result<Self> {
        let sel = selector("tbody")?;
        let bodies = doc
            .select(&sel)
            .skip(LEADING_BOILERPLATE_TABLES)
            .map(|tb| (tb, tb.inner_html()))
            .collect();
        Ok(Self { bodies })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// First table body whose markup carries the section's marker.
    pub fn locate(&self, section: Section) -> Option<ElementRef<'a>> {
        self.bodies
            .iter()
            .find(|(_, html)| section.matches(html))
            .map(|(tb, _)| *tb)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressBlock {
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Second row holds the street lines, then optional `Phone:`/`Email:` lines.
pub fn read_address(tbody: ElementRef<'_>) -> Result<AddressBlock> {
    let rows = select_all(tbody, "tr")?;
    let text = text_content(nth(&rows, 1, "address rows")?);

    // Text before the first separator is the cell's own indentation.
    let lines: Vec<&str> = text.split(ADDRESS_LINE_SEP).skip(1).collect();

    let mut block = AddressBlock {
        address: lines.iter().take(2).copied().collect::<Vec<_>>().join("\n"),
        ..Default::default()
    };
    for line in &lines {
        if line.contains("Phone") {
            block.phone = Some(strip_label(line, "Phone: "));
        } else if line.contains("Email") {
            block.email = Some(strip_label(line, "Email: "));
        }
    }
    Ok(block)
}

pub fn read_mailing_address(tbody: ElementRef<'_>) -> Result<String> {
    let rows = select_all(tbody, "tr")?;
    let text = text_content(nth(&rows, 1, "mailing address rows")?);
    Ok(strip_double_tabs(text.trim()))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    pub ethics_course_completion_date: Option<String>,
    pub registration_date: String,
    pub status: String,
}

/// Second row, cells: completion date, registration date, status.
pub fn read_registration(tbody: ElementRef<'_>) -> Result<Registration> {
    let rows = select_all(tbody, "tr")?;
    let cells = select_all(nth(&rows, 1, "registration rows")?, "td")?;
    let cell = |i| nth(&cells, i, "registration cells").map(|c| s!(text_content(c).trim()));

    Ok(Registration {
        ethics_course_completion_date: non_blank(&cell(0)?),
        registration_date: cell(1)?,
        status: cell(2)?,
    })
}

/// Rows after the two header rows; cells: entity, type, effective, termination.
pub fn read_relationships(tbody: ElementRef<'_>) -> Result<Vec<RelationshipRecord>> {
    let rows = select_all(tbody, "tr")?;
    let td = selector("td")?;

    rows.iter()
        .skip(RELATIONSHIP_HEADER_ROWS)
        .map(|row| -> Result<RelationshipRecord> {
            let cells: Vec<ElementRef<'_>> = row.select(&td).collect();
            let cell =
                |i| nth(&cells, i, "relationship cells").map(|c| s!(text_content(c).trim()));
            Ok(RelationshipRecord {
                entity_name: cell(0)?,
                entity_id: None,
                kind: cell(1)?,
                effective_date: cell(2)?,
                termination_date: non_blank(&cell(3)?),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;

    fn tbody(doc: &Html) -> ElementRef<'_> {
        doc.select(&selector("tbody").unwrap()).next().unwrap()
    }

    fn table(inner: &str) -> Html {
        Html::parse_document(&format!("<html><body><table><tbody>{inner}</tbody></table></body></html>"))
    }

    fn chrome() -> String {
        "<table><tr><td>nav ADDRESS</td></tr></table>".repeat(LEADING_BOILERPLATE_TABLES)
    }

    #[test]
    fn address_marker_excludes_mailing_address() {
        assert!(Section::Address.matches("<td>ADDRESS</td>"));
        assert!(!Section::Address.matches("<td>MAILING ADDRESS</td><td>ADDRESS</td>"));
        assert!(Section::MailingAddress.matches("<td>MAILING ADDRESS</td>"));
    }

    #[test]
    fn ethics_and_relationship_markers() {
        assert!(Section::EthicsRegistration.matches("<b>ETHICS COURSE COMPLETION DATE</b>"));
        assert!(!Section::EthicsRegistration.matches("<b>ETHICS COURSE</b>"));
        assert!(Section::Relationships.matches("<b>LOBBYIST RELATIONSHIPS</b>"));
        assert!(!Section::Relationships.matches("<b>relationships</b>"));
    }

    #[test]
    fn leading_chrome_is_never_searched() {
        let html = format!(
            "<html><body>{}<table><tr><td>MAILING ADDRESS</td></tr></table></body></html>",
            chrome()
        );
        let doc = Html::parse_document(&html);
        let tables = DataTables::from_document(&doc).unwrap();
        assert_eq!(tables.len(), 1);
        // The chrome mentions ADDRESS but is skipped.
        assert!(tables.locate(Section::Address).is_none());
        assert!(tables.locate(Section::MailingAddress).is_some());
    }

    #[test]
    fn address_lines_phone_and_email() {
        let doc = table(
            "<tr><td>ADDRESS</td></tr>\
             <tr><td>\n\t\t1215 K STREET, SUITE 1000\n\t\tSACRAMENTO, CA 95814\n\t\tPhone: (916) 555-0100\n\t\tEmail: jane@example.org\n\t</td></tr>",
        );
        let block = read_address(tbody(&doc)).unwrap();
        assert_eq!(block.address, "1215 K STREET, SUITE 1000\nSACRAMENTO, CA 95814");
        assert_eq!(block.phone.as_deref(), Some("(916) 555-0100"));
        assert_eq!(block.email.as_deref(), Some("jane@example.org"));
    }

    #[test]
    fn address_without_contact_lines() {
        let doc = table(
            "<tr><td>ADDRESS</td></tr>\
             <tr><td>\n\t\tPO BOX 1\n\t\tFRESNO, CA 93701\n\t</td></tr>",
        );
        let block = read_address(tbody(&doc)).unwrap();
        assert_eq!(block.address, "PO BOX 1\nFRESNO, CA 93701\n\t");
        assert_eq!(block.phone, None);
        assert_eq!(block.email, None);
    }

    #[test]
    fn address_missing_second_row_is_structural() {
        let doc = table("<tr><td>ADDRESS</td></tr>");
        let err = read_address(tbody(&doc)).unwrap_err();
        assert!(matches!(err, ScrapeError::Structure(_)));
    }

    #[test]
    fn mailing_address_drops_tab_pairs() {
        let doc = table(
            "<tr><td>MAILING ADDRESS</td></tr>\
             <tr><td>\n\t\tPO BOX 99\n\t\tSACRAMENTO, CA 95812\n\t</td></tr>",
        );
        let text = read_mailing_address(tbody(&doc)).unwrap();
        assert_eq!(text, "PO BOX 99\nSACRAMENTO, CA 95812");
    }

    #[test]
    fn registration_cells_map_by_position() {
        let doc = table(
            "<tr><td>ETHICS COURSE COMPLETION DATE</td><td>REGISTRATION DATE</td><td>STATUS</td></tr>\
             <tr><td> 11/15/2022 </td><td> 12/01/2022 </td><td> ACTIVE </td></tr>",
        );
        let reg = read_registration(tbody(&doc)).unwrap();
        assert_eq!(reg.ethics_course_completion_date.as_deref(), Some("11/15/2022"));
        assert_eq!(reg.registration_date, "12/01/2022");
        assert_eq!(reg.status, "ACTIVE");
    }

    #[test]
    fn blank_completion_date_is_absent() {
        let doc = table(
            "<tr><td>ETHICS COURSE COMPLETION DATE</td></tr>\
             <tr><td>  </td><td>12/01/2022</td><td>TERMINATED</td></tr>",
        );
        let reg = read_registration(tbody(&doc)).unwrap();
        assert_eq!(reg.ethics_course_completion_date, None);
        assert_eq!(reg.status, "TERMINATED");
    }

    #[test]
    fn short_registration_row_is_structural() {
        let doc = table(
            "<tr><td>ETHICS COURSE COMPLETION DATE</td></tr>\
             <tr><td>11/15/2022</td><td>12/01/2022</td></tr>",
        );
        assert!(matches!(
            read_registration(tbody(&doc)),
            Err(ScrapeError::Structure(_))
        ));
    }

    #[test]
    fn relationships_skip_headers_and_normalize_termination() {
        let doc = table(
            "<tr><td>LOBBYIST RELATIONSHIPS</td></tr>\
             <tr><td>NAME</td><td>TYPE</td><td>EFFECTIVE</td><td>TERMINATION</td></tr>\
             <tr><td> ACME WATER DISTRICT </td><td>EMPLOYER</td><td>01/01/2023</td><td> </td></tr>\
             <tr><td>BIG FIRM LLP</td><td>FIRM</td><td>02/01/2023</td><td>06/30/2023</td></tr>",
        );
        let rels = read_relationships(tbody(&doc)).unwrap();
        assert_eq!(rels.len(), 2);
        assert_eq!(rels[0].entity_name, "ACME WATER DISTRICT");
        assert_eq!(rels[0].kind, "EMPLOYER");
        assert_eq!(rels[0].termination_date, None);
        assert_eq!(rels[1].termination_date.as_deref(), Some("06/30/2023"));
        assert!(rels.iter().all(|r| r.entity_id.is_none()));
    }

    #[test]
    fn relationships_with_only_headers_is_empty() {
        let doc = table(
            "<tr><td>LOBBYIST RELATIONSHIPS</td></tr>\
             <tr><td>NAME</td><td>TYPE</td><td>EFFECTIVE</td><td>TERMINATION</td></tr>",
        );
        assert!(read_relationships(tbody(&doc)).unwrap().is_empty());
    }

    #[test]
    fn short_relationship_row_is_structural() {
        let doc = table(
            "<tr><td>LOBBYIST RELATIONSHIPS</td></tr><tr><td>NAME</td></tr>\
             <tr><td>ACME</td><td>EMPLOYER</td></tr>",
        );
        assert!(matches!(
            read_relationships(tbody(&doc)),
            Err(ScrapeError::Structure(_))
        ));
    }
}
