use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Available, PageOptions};

/// A column in a course gradebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeColumn {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether this is the course's external (final) grade.
    #[serde(default)]
    pub external_grade: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    /// Content item the column grades, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<ColumnScore>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<ColumnAvailability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grading: Option<Grading>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnScore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnAvailability {
    /// Whether students can see the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<Available>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradingType {
    Attempts,
    Calculated,
    Manual,
    /// Any value added by a newer server release.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grading {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<GradingType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts_allowed: Option<u32>,

    /// Primary id of the grade schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

/// Body of a column create or update. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeColumnInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ColumnScore>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<ColumnAvailability>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grading: Option<Grading>,
}

impl GradeColumnInput {
    /// A manual column out of `possible` points.
    pub fn manual(name: impl Into<String>, possible: f64) -> Self {
        Self {
            name: Some(name.into()),
            score: Some(ColumnScore {
                possible: Some(possible),
            }),
            grading: Some(Grading {
                kind: Some(GradingType::Manual),
                ..Grading::default()
            }),
            ..Self::default()
        }
    }
}

/// Filters for the column list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(flatten)]
    pub paging: PageOptions,
}

impl ColumnListOptions {
    pub const NAMES: [&'static str; 5] = ["contentId", "displayName", "offset", "limit", "fields"];
}

/// State of a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeStatus {
    Graded,
    NeedsGrading,
    /// Any value added by a newer server release.
    #[serde(other)]
    Unknown,
}

/// A user's grade in one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub user_id: String,

    pub column_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GradeStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_grade: Option<DisplayGrade>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default)]
    pub exempt: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_date: Option<DateTime<Utc>>,
}

/// The grade as shown to the student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayGrade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Body of a grade update. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt: Option<bool>,
}

impl GradeInput {
    pub fn score(score: f64) -> Self {
        Self {
            score: Some(score),
            ..Self::default()
        }
    }
}
