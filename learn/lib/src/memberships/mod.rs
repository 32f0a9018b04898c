//! Course memberships (enrollments).
//!
//! Memberships are addressed by the course and the user; creating one is a
//! `PUT` to the membership's own URL.
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getCourseMemberships | GET | /learn/api/public/v1/courses/{courseId}/users |
//! | getMembership | GET | /learn/api/public/v1/courses/{courseId}/users/{userId} |
//! | createMembership | PUT | /learn/api/public/v1/courses/{courseId}/users/{userId} |
//! | updateMembership | PATCH | /learn/api/public/v1/courses/{courseId}/users/{userId} |
//! | deleteMembership | DELETE | /learn/api/public/v1/courses/{courseId}/users/{userId} |
//! | getUserMemberships | GET | /learn/api/public/v1/users/{userId}/courses |

mod types;

pub use types::*;

use rest_call::openapi::EndpointSpec;
use rest_call::response::{EmptyFormat, JsonFormat};
use rest_call::{ApiError, Endpoint, RestCall, RestMethod};

use crate::common::{Page, endpoint};

const COURSE_MEMBERS: &str = "/learn/api/public/v1/courses/{courseId}/users";
const MEMBERSHIP: &str = "/learn/api/public/v1/courses/{courseId}/users/{userId}";
const USER_COURSES: &str = "/learn/api/public/v1/users/{userId}/courses";

fn list_course_memberships_endpoint() -> Endpoint<JsonFormat<Page<Membership>>> {
    endpoint("getCourseMemberships", RestMethod::Get, COURSE_MEMBERS)
        .description("Returns a list of user memberships for the specified course")
        .entitlement("course.user.VIEW")
        .query_options(&MembershipListOptions::NAMES)
        .build()
}

fn get_membership_endpoint() -> Endpoint<JsonFormat<Membership>> {
    endpoint("getMembership", RestMethod::Get, MEMBERSHIP)
        .description("Loads a user membership in the specified course")
        .entitlement("course.user.VIEW")
        .query_options(&["expand", "fields"])
        .build()
}

fn create_membership_endpoint() -> Endpoint<JsonFormat<Membership>> {
    endpoint("createMembership", RestMethod::Put, MEMBERSHIP)
        .description("Enrolls a user in a course")
        .entitlement("course.user.enroll.EXECUTE")
        .build()
}

fn update_membership_endpoint() -> Endpoint<JsonFormat<Membership>> {
    endpoint("updateMembership", RestMethod::Patch, MEMBERSHIP)
        .description("Updates a user membership")
        .entitlement("course.user-role.MODIFY")
        .build()
}

fn delete_membership_endpoint() -> Endpoint<EmptyFormat> {
    endpoint("deleteMembership", RestMethod::Delete, MEMBERSHIP)
        .description("Removes a user from a course")
        .entitlement("course.user.enroll.EXECUTE")
        .build()
}

fn list_user_memberships_endpoint() -> Endpoint<JsonFormat<Page<Membership>>> {
    endpoint("getUserMemberships", RestMethod::Get, USER_COURSES)
        .description("Returns a list of course memberships for the specified user")
        .query_options(&MembershipListOptions::NAMES)
        .build()
}

/// Lists the members of a course.
///
/// ## Examples
///
/// ```rust
/// use learn_lib::memberships::{self, MembershipListOptions, CourseRole};
/// use learn_lib::Id;
///
/// let call = memberships::list_course_memberships(
///     Id::course_id("BIO-101"),
///     &MembershipListOptions {
///         role: Some(CourseRole::Instructor),
///         ..Default::default()
///     },
/// )
/// .unwrap();
///
/// assert_eq!(call.path(), "/learn/api/public/v1/courses/courseId:BIO-101/users");
/// assert_eq!(call.query_value("role"), Some("Instructor"));
/// ```
pub fn list_course_memberships(
    course_id: impl AsRef<str>,
    options: &MembershipListOptions,
) -> Result<RestCall<JsonFormat<Page<Membership>>>, ApiError> {
    RestCall::builder(list_course_memberships_endpoint())
        .path_param("courseId", course_id.as_ref())
        .query_params(options)
        .build()
}

pub fn get_membership(
    course_id: impl AsRef<str>,
    user_id: impl AsRef<str>,
) -> Result<RestCall<JsonFormat<Membership>>, ApiError> {
    RestCall::builder(get_membership_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("userId", user_id.as_ref())
        .build()
}

pub fn create_membership(
    course_id: impl AsRef<str>,
    user_id: impl AsRef<str>,
    membership: &MembershipInput,
) -> Result<RestCall<JsonFormat<Membership>>, ApiError> {
    RestCall::builder(create_membership_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("userId", user_id.as_ref())
        .json_body(membership)
        .build()
}

pub fn update_membership(
    course_id: impl AsRef<str>,
    user_id: impl AsRef<str>,
    membership: &MembershipInput,
) -> Result<RestCall<JsonFormat<Membership>>, ApiError> {
    RestCall::builder(update_membership_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("userId", user_id.as_ref())
        .json_body(membership)
        .build()
}

pub fn delete_membership(
    course_id: impl AsRef<str>,
    user_id: impl AsRef<str>,
) -> Result<RestCall<EmptyFormat>, ApiError> {
    RestCall::builder(delete_membership_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("userId", user_id.as_ref())
        .build()
}

/// Lists the courses a user belongs to.
pub fn list_user_memberships(
    user_id: impl AsRef<str>,
    options: &MembershipListOptions,
) -> Result<RestCall<JsonFormat<Page<Membership>>>, ApiError> {
    RestCall::builder(list_user_memberships_endpoint())
        .path_param("userId", user_id.as_ref())
        .query_params(options)
        .build()
}

pub fn endpoints() -> Vec<EndpointSpec> {
    [
        list_course_memberships_endpoint().spec(),
        get_membership_endpoint().spec(),
        create_membership_endpoint().spec(),
        update_membership_endpoint().spec(),
        delete_membership_endpoint().spec(),
        list_user_memberships_endpoint().spec(),
    ]
    .into_iter()
    .map(|spec| spec.with_tag("memberships"))
    .collect()
}
