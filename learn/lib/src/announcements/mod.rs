//! Course announcements.
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getAnnouncements | GET | /learn/api/public/v1/courses/{courseId}/announcements |
//! | createAnnouncement | POST | /learn/api/public/v1/courses/{courseId}/announcements |
//! | getAnnouncement | GET | /learn/api/public/v1/courses/{courseId}/announcements/{announcementId} |
//! | updateAnnouncement | PATCH | /learn/api/public/v1/courses/{courseId}/announcements/{announcementId} |
//! | deleteAnnouncement | DELETE | /learn/api/public/v1/courses/{courseId}/announcements/{announcementId} |

mod types;

pub use types::*;

use rest_call::openapi::EndpointSpec;
use rest_call::response::{EmptyFormat, JsonFormat};
use rest_call::{ApiError, Endpoint, RestCall, RestMethod};

use crate::common::{Page, PageOptions, endpoint};

const ANNOUNCEMENTS: &str = "/learn/api/public/v1/courses/{courseId}/announcements";
const ANNOUNCEMENT: &str = "/learn/api/public/v1/courses/{courseId}/announcements/{announcementId}";

fn list_announcements_endpoint() -> Endpoint<JsonFormat<Page<Announcement>>> {
    endpoint("getAnnouncements", RestMethod::Get, ANNOUNCEMENTS)
        .description("Returns a list of announcements for a course")
        .query_options(&PageOptions::NAMES)
        .build()
}

fn create_announcement_endpoint() -> Endpoint<JsonFormat<Announcement>> {
    endpoint("createAnnouncement", RestMethod::Post, ANNOUNCEMENTS)
        .description("Creates an announcement in a course")
        .entitlement("course.announcements.CREATE")
        .build()
}

fn get_announcement_endpoint() -> Endpoint<JsonFormat<Announcement>> {
    endpoint("getAnnouncement", RestMethod::Get, ANNOUNCEMENT)
        .description("Loads a course announcement")
        .query_options(&["fields"])
        .build()
}

fn update_announcement_endpoint() -> Endpoint<JsonFormat<Announcement>> {
    endpoint("updateAnnouncement", RestMethod::Patch, ANNOUNCEMENT)
        .description("Updates a course announcement")
        .entitlement("course.announcements.MODIFY")
        .build()
}

fn delete_announcement_endpoint() -> Endpoint<EmptyFormat> {
    endpoint("deleteAnnouncement", RestMethod::Delete, ANNOUNCEMENT)
        .description("Deletes a course announcement")
        .entitlement("course.announcements.DELETE")
        .build()
}

pub fn list_announcements(
    course_id: impl AsRef<str>,
    paging: &PageOptions,
) -> Result<RestCall<JsonFormat<Page<Announcement>>>, ApiError> {
    RestCall::builder(list_announcements_endpoint())
        .path_param("courseId", course_id.as_ref())
        .query_params(paging)
        .build()
}

/// Posts an announcement.
///
/// ## Examples
///
/// ```rust
/// use learn_lib::announcements::{self, AnnouncementInput};
///
/// let call = announcements::create_announcement(
///     "_7_1",
///     &AnnouncementInput::new("Exam moved", "<p>The midterm is now on Friday.</p>"),
/// )
/// .unwrap();
///
/// assert_eq!(call.path(), "/learn/api/public/v1/courses/_7_1/announcements");
/// ```
pub fn create_announcement(
    course_id: impl AsRef<str>,
    announcement: &AnnouncementInput,
) -> Result<RestCall<JsonFormat<Announcement>>, ApiError> {
    RestCall::builder(create_announcement_endpoint())
        .path_param("courseId", course_id.as_ref())
        .json_body(announcement)
        .build()
}

pub fn get_announcement(
    course_id: impl AsRef<str>,
    announcement_id: impl AsRef<str>,
) -> Result<RestCall<JsonFormat<Announcement>>, ApiError> {
    RestCall::builder(get_announcement_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("announcementId", announcement_id.as_ref())
        .build()
}

pub fn update_announcement(
    course_id: impl AsRef<str>,
    announcement_id: impl AsRef<str>,
    announcement: &AnnouncementInput,
) -> Result<RestCall<JsonFormat<Announcement>>, ApiError> {
    RestCall::builder(update_announcement_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("announcementId", announcement_id.as_ref())
        .json_body(announcement)
        .build()
}

pub fn delete_announcement(
    course_id: impl AsRef<str>,
    announcement_id: impl AsRef<str>,
) -> Result<RestCall<EmptyFormat>, ApiError> {
    RestCall::builder(delete_announcement_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("announcementId", announcement_id.as_ref())
        .build()
}

pub fn endpoints() -> Vec<EndpointSpec> {
    [
        list_announcements_endpoint().spec(),
        create_announcement_endpoint().spec(),
        get_announcement_endpoint().spec(),
        update_announcement_endpoint().spec(),
        delete_announcement_endpoint().spec(),
    ]
    .into_iter()
    .map(|spec| spec.with_tag("announcements"))
    .collect()
}
