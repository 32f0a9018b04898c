use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Availability, PageOptions};

/// Handler id of a folder.
pub const FOLDER_HANDLER: &str = "resource/x-bb-folder";

/// Handler id of a plain document.
pub const DOCUMENT_HANDLER: &str = "resource/x-bb-document";

/// Handler id of a web link.
pub const LINK_HANDLER: &str = "resource/x-bb-externallink";

/// An item in a course outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    #[serde(default)]
    pub has_children: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_handler: Option<ContentHandler>,
}

impl Content {
    pub fn is_folder(&self) -> bool {
        self.content_handler
            .as_ref()
            .is_some_and(|handler| handler.id == FOLDER_HANDLER)
    }
}

/// Identifies the kind of item; handler-specific fields are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentHandler {
    pub id: String,

    /// Target of a web link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ContentHandler {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: None,
        }
    }
}

/// Body of a create or update. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_handler: Option<ContentHandler>,
}

impl ContentInput {
    pub fn folder(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content_handler: Some(ContentHandler::new(FOLDER_HANDLER)),
            ..Self::default()
        }
    }

    pub fn document(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
            content_handler: Some(ContentHandler::new(DOCUMENT_HANDLER)),
            ..Self::default()
        }
    }

    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content_handler: Some(ContentHandler {
                id: LINK_HANDLER.to_string(),
                url: Some(url.into()),
            }),
            ..Self::default()
        }
    }
}

/// Filters for the content list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentListOptions {
    /// Also return descendants of nested folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,

    #[serde(rename = "contentHandler.id", skip_serializing_if = "Option::is_none")]
    pub content_handler: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(flatten)]
    pub paging: PageOptions,
}

impl ContentListOptions {
    pub const NAMES: [&'static str; 6] = [
        "recursive",
        "contentHandler.id",
        "title",
        "offset",
        "limit",
        "fields",
    ];
}
