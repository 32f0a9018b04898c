use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::{Available, PageOptions};
use crate::courses::Course;
use crate::users::User;

/// ```json
/// {
///   "userId": "_5_1",
///   "courseId": "_7_1",
///   "courseRoleId": "Student",
///   "availability": { "available": "Yes" },
///   "lastAccessed": "2026-10-01T08:30:00.000Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub user_id: String,

    pub course_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_course_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<MembershipAvailability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_role_id: Option<CourseRole>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<DateTime<Utc>>,

    /// Present with `expand=user`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Present with `expand=course`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipAvailability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<Available>,
}

/// A course role. Institutions may define their own roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CourseRole {
    Instructor,
    BbFacilitator,
    TeachingAssistant,
    CourseBuilder,
    Grader,
    Student,
    Guest,
    Custom(String),
}

impl CourseRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Instructor => "Instructor",
            Self::BbFacilitator => "BbFacilitator",
            Self::TeachingAssistant => "TeachingAssistant",
            Self::CourseBuilder => "CourseBuilder",
            Self::Grader => "Grader",
            Self::Student => "Student",
            Self::Guest => "Guest",
            Self::Custom(role) => role,
        }
    }
}

impl From<&str> for CourseRole {
    fn from(role: &str) -> Self {
        match role {
            "Instructor" => Self::Instructor,
            "BbFacilitator" => Self::BbFacilitator,
            "TeachingAssistant" => Self::TeachingAssistant,
            "CourseBuilder" => Self::CourseBuilder,
            "Grader" => Self::Grader,
            "Student" => Self::Student,
            "Guest" => Self::Guest,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl Serialize for CourseRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CourseRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let role = String::deserialize(deserializer)?;
        Ok(Self::from(role.as_str()))
    }
}

/// Body of a create or update. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_course_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<MembershipAvailability>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_role_id: Option<CourseRole>,
}

/// Filters for the membership list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<CourseRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,

    #[serde(rename = "availability.available", skip_serializing_if = "Option::is_none")]
    pub available: Option<Available>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_access: Option<DateTime<Utc>>,

    /// `user` or `course`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,

    #[serde(flatten)]
    pub paging: PageOptions,
}

impl MembershipListOptions {
    pub const NAMES: [&'static str; 8] = [
        "role",
        "dataSourceId",
        "availability.available",
        "lastAccess",
        "expand",
        "offset",
        "limit",
        "fields",
    ];
}
