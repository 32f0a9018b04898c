use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Available, DateCompare, PageOptions};

/// ```json
/// {
///   "id": "_5_1",
///   "userName": "jdoe",
///   "externalId": "1001",
///   "institutionRoleIds": ["STUDENT"],
///   "availability": { "available": "Yes" },
///   "name": { "given": "Jane", "family": "Doe" },
///   "contact": { "email": "jdoe@example.edu" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    pub user_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub educational_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub institution_role_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system_role_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<UserAvailability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<UserName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAvailability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<Available>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
    pub given: String,

    pub family: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_display_name: Option<String>,
}

impl UserName {
    /// Given and family name separated by a space.
    pub fn display(&self) -> String {
        match (self.given.is_empty(), self.family.is_empty()) {
            (false, false) => format!("{} {}", self.given, self.family),
            (true, _) => self.family.clone(),
            (false, true) => self.given.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_page: Option<String>,
}

/// Body of a create or update. Unset fields are left out.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Write-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub institution_role_ids: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub system_role_ids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<UserAvailability>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<UserName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

impl std::fmt::Debug for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInput")
            .field("external_id", &self.external_id)
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Filters for `getUsers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    #[serde(rename = "name.family", skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    #[serde(rename = "contact.email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "availability.available", skip_serializing_if = "Option::is_none")]
    pub available: Option<Available>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_compare: Option<DateCompare>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(flatten)]
    pub paging: PageOptions,
}

impl UserListOptions {
    pub const NAMES: [&'static str; 13] = [
        "userName",
        "externalId",
        "dataSourceId",
        "studentId",
        "name.family",
        "contact.email",
        "availability.available",
        "created",
        "createdCompare",
        "sort",
        "offset",
        "limit",
        "fields",
    ];
}
