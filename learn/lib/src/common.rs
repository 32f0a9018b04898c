//! Types shared by every endpoint group.

use std::fmt;

use chrono::{DateTime, Utc};
use rest_call::endpoint::builder_state::Present;
use rest_call::{EndpointBuilder, ResponseFormat, RestMethod};
use serde::{Deserialize, Serialize};

/// Root of the public REST API.
pub const API_ROOT: &str = "/learn/api/public";

/// Starts an endpoint definition with its required fields set.
pub(crate) fn endpoint<F: ResponseFormat>(
    id: &str,
    method: RestMethod,
    path: &str,
) -> EndpointBuilder<Present, Present, Present, F> {
    rest_call::Endpoint::builder().id(id).method(method).path(path)
}

/// An object identifier in any of the forms the LMS accepts.
///
/// Every path parameter named `...Id` takes either the primary id
/// (`_123_1`) or a prefixed secondary id such as `externalId:CS101`.
///
/// ## Examples
///
/// ```rust
/// use learn_lib::Id;
///
/// assert_eq!(Id::external("CS 101").as_str(), "externalId:CS 101");
/// assert_eq!(Id::course_id("HIST-201").as_str(), "courseId:HIST-201");
/// assert_eq!(Id::user_name("jdoe").to_string(), "userName:jdoe");
/// assert_eq!(Id::primary("_42_1").as_str(), "_42_1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id(String);

impl Id {
    /// A primary id such as `_123_1`.
    pub fn primary(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `externalId:<id>`, the id assigned by an integration.
    pub fn external(id: impl AsRef<str>) -> Self {
        Self(format!("externalId:{}", id.as_ref()))
    }

    /// `courseId:<id>`, the human-readable course id.
    pub fn course_id(id: impl AsRef<str>) -> Self {
        Self(format!("courseId:{}", id.as_ref()))
    }

    /// `userName:<name>`.
    pub fn user_name(name: impl AsRef<str>) -> Self {
        Self(format!("userName:{}", name.as_ref()))
    }

    /// `uuid:<uuid>`.
    pub fn uuid(uuid: impl AsRef<str>) -> Self {
        Self(format!("uuid:{}", uuid.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One page of a list response.
///
/// ## Example
///
/// ```json
/// {
///   "results": [ { "id": "_1_1" } ],
///   "paging": { "nextPage": "/learn/api/public/v3/courses?offset=100" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub results: Vec<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl<T> Page<T> {
    /// The server-relative link to the next page, if there is one.
    pub fn next_page(&self) -> Option<&str> {
        self.paging
            .as_ref()
            .and_then(|p| p.next_page.as_deref())
            .filter(|link| !link.is_empty())
    }
}

/// Paging block of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

/// Paging and projection options accepted by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageOptions {
    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Maximum number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Fields to include in each result.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl PageOptions {
    /// Query option names, in the order they are sent.
    pub const NAMES: [&'static str; 3] = ["offset", "limit", "fields"];

    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Comparison applied to a `created` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateCompare {
    GreaterOrEqual,
    LessThan,
}

/// Whether an object is visible to its audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Available {
    Yes,
    No,
    Disabled,
    /// Availability follows the course term.
    Term,
    /// Shown with restricted access (Ultra content).
    PartiallyVisible,
    /// Any value added by a newer server release.
    #[serde(other)]
    Unknown,
}

impl Available {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Disabled => "Disabled",
            Self::Term => "Term",
            Self::PartiallyVisible => "PartiallyVisible",
            Self::Unknown => "Unknown",
        }
    }
}

/// How an availability window is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationType {
    Continuous,
    DateRange,
    FixedNumDays,
    Term,
    /// Any value added by a newer server release.
    #[serde(other)]
    Unknown,
}

/// An availability window.
///
/// ## Example
///
/// ```json
/// { "type": "DateRange", "start": "2026-09-01T00:00:00Z", "end": "2026-12-20T00:00:00Z" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Duration {
    #[serde(rename = "type")]
    pub kind: DurationType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_use: Option<u32>,
}

impl Duration {
    pub fn continuous() -> Self {
        Self {
            kind: DurationType::Continuous,
            start: None,
            end: None,
            days_of_use: None,
        }
    }

    pub fn date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            kind: DurationType::DateRange,
            start: Some(start),
            end: Some(end),
            days_of_use: None,
        }
    }
}

/// Availability settings shared by courses, terms and announcements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<Available>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
}
