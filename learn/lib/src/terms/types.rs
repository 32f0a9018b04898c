use serde::{Deserialize, Serialize};

use crate::common::{Availability, Available, PageOptions};

/// ```json
/// {
///   "id": "_3_1",
///   "externalId": "2026-FA",
///   "dataSourceId": "_2_1",
///   "name": "Fall 2026",
///   "availability": { "available": "Yes", "duration": { "type": "Continuous" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

/// Body of a create or update. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

/// Filters for `getTerms`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    #[serde(rename = "availability.available", skip_serializing_if = "Option::is_none")]
    pub available: Option<Available>,

    #[serde(flatten)]
    pub paging: PageOptions,
}

impl TermListOptions {
    pub const NAMES: [&'static str; 6] = [
        "externalId",
        "dataSourceId",
        "availability.available",
        "offset",
        "limit",
        "fields",
    ];
}
