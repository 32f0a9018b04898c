use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ```json
/// {
///   "id": "_12_1",
///   "title": "Exam moved",
///   "body": "<p>The midterm is now on Friday.</p>",
///   "creator": "_5_1",
///   "draft": false,
///   "availability": { "duration": { "type": "Permanent" } },
///   "position": 1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,

    pub title: String,

    /// HTML body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Primary id of the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    #[serde(default)]
    pub draft: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<AnnouncementAvailability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementAvailability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<AnnouncementDuration>,
}

/// Announcements are either always shown or shown inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnouncementDurationType {
    Permanent,
    Restricted,
    /// Any value added by a newer server release.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDuration {
    #[serde(rename = "type")]
    pub kind: AnnouncementDurationType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

/// Body of a create or update. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<AnnouncementAvailability>,
}

impl AnnouncementInput {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
            ..Self::default()
        }
    }
}
