//! Course content: folders, documents, links and other items in a course
//! outline.
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getContents | GET | /learn/api/public/v1/courses/{courseId}/contents |
//! | createContent | POST | /learn/api/public/v1/courses/{courseId}/contents |
//! | getContent | GET | /learn/api/public/v1/courses/{courseId}/contents/{contentId} |
//! | updateContent | PATCH | /learn/api/public/v1/courses/{courseId}/contents/{contentId} |
//! | deleteContent | DELETE | /learn/api/public/v1/courses/{courseId}/contents/{contentId} |
//! | getContentChildren | GET | /learn/api/public/v1/courses/{courseId}/contents/{contentId}/children |
//! | createChild | POST | /learn/api/public/v1/courses/{courseId}/contents/{contentId}/children |

mod types;

pub use types::*;

use rest_call::openapi::EndpointSpec;
use rest_call::response::{EmptyFormat, JsonFormat};
use rest_call::{ApiError, Endpoint, RestCall, RestMethod};

use crate::common::{Page, endpoint};

const CONTENTS: &str = "/learn/api/public/v1/courses/{courseId}/contents";
const CONTENT: &str = "/learn/api/public/v1/courses/{courseId}/contents/{contentId}";
const CHILDREN: &str = "/learn/api/public/v1/courses/{courseId}/contents/{contentId}/children";

fn list_contents_endpoint() -> Endpoint<JsonFormat<Page<Content>>> {
    endpoint("getContents", RestMethod::Get, CONTENTS)
        .description("Returns the top-level content items of a course")
        .query_options(&ContentListOptions::NAMES)
        .build()
}

fn create_content_endpoint() -> Endpoint<JsonFormat<Content>> {
    endpoint("createContent", RestMethod::Post, CONTENTS)
        .description("Creates a top-level content item")
        .entitlement("course.content.CREATE")
        .build()
}

fn get_content_endpoint() -> Endpoint<JsonFormat<Content>> {
    endpoint("getContent", RestMethod::Get, CONTENT)
        .description("Loads a content item")
        .query_options(&["fields"])
        .build()
}

fn update_content_endpoint() -> Endpoint<JsonFormat<Content>> {
    endpoint("updateContent", RestMethod::Patch, CONTENT)
        .description("Updates a content item")
        .entitlement("course.content.MODIFY")
        .build()
}

fn delete_content_endpoint() -> Endpoint<EmptyFormat> {
    endpoint("deleteContent", RestMethod::Delete, CONTENT)
        .description("Deletes a content item and everything below it")
        .entitlement("course.content.DELETE")
        .build()
}

fn get_children_endpoint() -> Endpoint<JsonFormat<Page<Content>>> {
    endpoint("getContentChildren", RestMethod::Get, CHILDREN)
        .description("Returns the children of a folder")
        .query_options(&ContentListOptions::NAMES)
        .build()
}

fn create_child_endpoint() -> Endpoint<JsonFormat<Content>> {
    endpoint("createChild", RestMethod::Post, CHILDREN)
        .description("Creates a content item inside a folder")
        .entitlement("course.content.CREATE")
        .build()
}

pub fn list_contents(
    course_id: impl AsRef<str>,
    options: &ContentListOptions,
) -> Result<RestCall<JsonFormat<Page<Content>>>, ApiError> {
    RestCall::builder(list_contents_endpoint())
        .path_param("courseId", course_id.as_ref())
        .query_params(options)
        .build()
}

pub fn create_content(
    course_id: impl AsRef<str>,
    content: &ContentInput,
) -> Result<RestCall<JsonFormat<Content>>, ApiError> {
    RestCall::builder(create_content_endpoint())
        .path_param("courseId", course_id.as_ref())
        .json_body(content)
        .build()
}

pub fn get_content(
    course_id: impl AsRef<str>,
    content_id: impl AsRef<str>,
) -> Result<RestCall<JsonFormat<Content>>, ApiError> {
    RestCall::builder(get_content_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("contentId", content_id.as_ref())
        .build()
}

pub fn update_content(
    course_id: impl AsRef<str>,
    content_id: impl AsRef<str>,
    content: &ContentInput,
) -> Result<RestCall<JsonFormat<Content>>, ApiError> {
    RestCall::builder(update_content_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("contentId", content_id.as_ref())
        .json_body(content)
        .build()
}

pub fn delete_content(
    course_id: impl AsRef<str>,
    content_id: impl AsRef<str>,
) -> Result<RestCall<EmptyFormat>, ApiError> {
    RestCall::builder(delete_content_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("contentId", content_id.as_ref())
        .build()
}

/// Lists the items inside a folder.
///
/// ## Examples
///
/// ```rust
/// use learn_lib::contents::{self, ContentListOptions};
///
/// let call = contents::get_children(
///     "_7_1",
///     "_30_1",
///     &ContentListOptions {
///         recursive: Some(true),
///         ..Default::default()
///     },
/// )
/// .unwrap();
///
/// assert_eq!(
///     call.path(),
///     "/learn/api/public/v1/courses/_7_1/contents/_30_1/children"
/// );
/// assert_eq!(call.query_value("recursive"), Some("true"));
/// ```
pub fn get_children(
    course_id: impl AsRef<str>,
    content_id: impl AsRef<str>,
    options: &ContentListOptions,
) -> Result<RestCall<JsonFormat<Page<Content>>>, ApiError> {
    RestCall::builder(get_children_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("contentId", content_id.as_ref())
        .query_params(options)
        .build()
}

pub fn create_child(
    course_id: impl AsRef<str>,
    parent_id: impl AsRef<str>,
    content: &ContentInput,
) -> Result<RestCall<JsonFormat<Content>>, ApiError> {
    RestCall::builder(create_child_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("contentId", parent_id.as_ref())
        .json_body(content)
        .build()
}

pub fn endpoints() -> Vec<EndpointSpec> {
    [
        list_contents_endpoint().spec(),
        create_content_endpoint().spec(),
        get_content_endpoint().spec(),
        update_content_endpoint().spec(),
        delete_content_endpoint().spec(),
        get_children_endpoint().spec(),
        create_child_endpoint().spec(),
    ]
    .into_iter()
    .map(|spec| spec.with_tag("contents"))
    .collect()
}
