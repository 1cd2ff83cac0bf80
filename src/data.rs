// src/data.rs
//
// Output model.
//
// - LobbyistRecord: one row of the dataset. Born in the index phase with only
//                   id + name, then completed by merging a LobbyistDetail.
// - LobbyistDetail: everything the detail page contributes (no id/name).
// - RelationshipRecord: one employer/client line from the detail page.
//
// Field order here is the field order in the JSON file. Absent optionals are
// omitted from the output, never written as null or "".

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyistRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailing_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethics_course_completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub relationships: Vec<RelationshipRecord>,
}

impl LobbyistRecord {
    /// Index-phase record: id and name only.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), ..Self::default() }
    }

    /// Assign every detail field onto this record. id/name are untouched.
    pub fn merge(&mut self, detail: LobbyistDetail) {
        let LobbyistDetail {
            address,
            mailing_address,
            phone,
            email,
            registration_date,
            ethics_course_completion_date,
            status,
            relationships,
        } = detail;

        self.address = address;
        self.mailing_address = mailing_address;
        self.phone = phone;
        self.email = email;
        self.registration_date = registration_date;
        self.ethics_course_completion_date = ethics_course_completion_date;
        self.status = status;
        self.relationships = relationships;
    }
}

/// What a detail page yields. Sections missing from the page stay `None`/empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LobbyistDetail {
    pub address: Option<String>,
    pub mailing_address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub registration_date: Option<String>,
    pub ethics_course_completion_date: Option<String>,
    pub status: Option<String>,
    pub relationships: Vec<RelationshipRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipRecord {
    pub entity_name: String,
    /// Never filled by extraction; see DESIGN.md.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub effective_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
}
