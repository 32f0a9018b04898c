use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Availability, Available, DateCompare, PageOptions};

/// A course or organization.
///
/// ```json
/// {
///   "id": "_7_1",
///   "externalId": "BIO-101",
///   "courseId": "BIO-101",
///   "name": "Biology",
///   "organization": false,
///   "ultraStatus": "Classic",
///   "availability": { "available": "Yes", "duration": { "type": "Continuous" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    /// Human-readable course id, unique per server.
    pub course_id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    #[serde(default)]
    pub organization: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultra_status: Option<UltraStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_guests: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<Enrollment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_access_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UltraStatus {
    Undecided,
    Classic,
    Ultra,
    UltraPreview,
    /// Any value added by a newer server release.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentType {
    InstructorLed,
    SelfEnrollment,
    EmailEnrollment,
    /// Any value added by a newer server release.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EnrollmentType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,

    /// Write-only; never returned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
}

/// Body of a create or update. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultra_status: Option<UltraStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_guests: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment: Option<Enrollment>,
}

/// A cross-listed child of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseChild {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Filters for `getCourses`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_compare: Option<DateCompare>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_guests: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<bool>,

    #[serde(rename = "availability.available", skip_serializing_if = "Option::is_none")]
    pub available: Option<Available>,

    /// e.g. `name(desc)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    #[serde(flatten)]
    pub paging: PageOptions,
}

impl CourseListOptions {
    pub const NAMES: [&'static str; 15] = [
        "courseId",
        "name",
        "description",
        "externalId",
        "created",
        "createdCompare",
        "allowGuests",
        "termId",
        "dataSourceId",
        "organization",
        "availability.available",
        "sort",
        "offset",
        "limit",
        "fields",
    ];
}
