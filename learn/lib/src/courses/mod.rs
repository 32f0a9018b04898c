//! Courses and organizations.
//!
//! Course CRUD uses the v3 resource; the cross-listing children resource is
//! still served under v1.
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getCourses | GET | /learn/api/public/v3/courses |
//! | createCourse | POST | /learn/api/public/v3/courses |
//! | getCourse | GET | /learn/api/public/v3/courses/{courseId} |
//! | updateCourse | PATCH | /learn/api/public/v3/courses/{courseId} |
//! | deleteCourse | DELETE | /learn/api/public/v3/courses/{courseId} |
//! | getCourseChildren | GET | /learn/api/public/v1/courses/{courseId}/children |

mod types;

pub use types::*;

use rest_call::openapi::EndpointSpec;
use rest_call::response::{EmptyFormat, JsonFormat};
use rest_call::{ApiError, Endpoint, RestCall, RestMethod};

use crate::common::{Page, PageOptions, endpoint};

const COURSES: &str = "/learn/api/public/v3/courses";
const COURSE: &str = "/learn/api/public/v3/courses/{courseId}";
const CHILDREN: &str = "/learn/api/public/v1/courses/{courseId}/children";

fn list_courses_endpoint() -> Endpoint<JsonFormat<Page<Course>>> {
    endpoint("getCourses", RestMethod::Get, COURSES)
        .description("Returns a list of courses and organizations")
        .query_options(&CourseListOptions::NAMES)
        .build()
}

fn create_course_endpoint() -> Endpoint<JsonFormat<Course>> {
    endpoint("createCourse", RestMethod::Post, COURSES)
        .description("Creates a course")
        .entitlement("system.course.CREATE")
        .build()
}

fn get_course_endpoint() -> Endpoint<JsonFormat<Course>> {
    endpoint("getCourse", RestMethod::Get, COURSE)
        .description("Loads a specific course")
        .query_options(&["fields", "expand"])
        .build()
}

fn update_course_endpoint() -> Endpoint<JsonFormat<Course>> {
    endpoint("updateCourse", RestMethod::Patch, COURSE)
        .description("Updates a course")
        .entitlement("course.configure-properties.EXECUTE")
        .build()
}

fn delete_course_endpoint() -> Endpoint<EmptyFormat> {
    endpoint("deleteCourse", RestMethod::Delete, COURSE)
        .description("Deletes a course; the deletion may complete asynchronously")
        .entitlement("system.course.DELETE")
        .query_options(&["cascade"])
        .build()
}

fn get_children_endpoint() -> Endpoint<JsonFormat<Page<CourseChild>>> {
    endpoint("getCourseChildren", RestMethod::Get, CHILDREN)
        .description("Returns the cross-listed children of a course")
        .query_options(&PageOptions::NAMES)
        .build()
}

/// `GET /learn/api/public/v3/courses`
///
/// ## Examples
///
/// ```rust
/// use learn_lib::courses::{self, CourseListOptions};
/// use learn_lib::PageOptions;
///
/// let call = courses::list_courses(&CourseListOptions {
///     name: Some("Biology".into()),
///     paging: PageOptions::limit(10),
///     ..Default::default()
/// })
/// .unwrap();
///
/// assert_eq!(call.path(), "/learn/api/public/v3/courses");
/// assert_eq!(call.query_value("name"), Some("Biology"));
/// assert_eq!(call.query_value("limit"), Some("10"));
/// ```
pub fn list_courses(
    options: &CourseListOptions,
) -> Result<RestCall<JsonFormat<Page<Course>>>, ApiError> {
    RestCall::builder(list_courses_endpoint())
        .query_params(options)
        .build()
}

pub fn create_course(course: &CourseInput) -> Result<RestCall<JsonFormat<Course>>, ApiError> {
    RestCall::builder(create_course_endpoint())
        .json_body(course)
        .build()
}

/// `GET /learn/api/public/v3/courses/{courseId}`
///
/// `course_id` takes any id form, e.g. [`Id::course_id`](crate::Id::course_id).
pub fn get_course(course_id: impl AsRef<str>) -> Result<RestCall<JsonFormat<Course>>, ApiError> {
    RestCall::builder(get_course_endpoint())
        .path_param("courseId", course_id.as_ref())
        .build()
}

pub fn update_course(
    course_id: impl AsRef<str>,
    course: &CourseInput,
) -> Result<RestCall<JsonFormat<Course>>, ApiError> {
    RestCall::builder(update_course_endpoint())
        .path_param("courseId", course_id.as_ref())
        .json_body(course)
        .build()
}

/// Deletes a course. With `cascade` the server also removes its children.
pub fn delete_course(
    course_id: impl AsRef<str>,
    cascade: bool,
) -> Result<RestCall<EmptyFormat>, ApiError> {
    RestCall::builder(delete_course_endpoint())
        .path_param("courseId", course_id.as_ref())
        .query_opt("cascade", cascade.then_some(true))
        .build()
}

pub fn get_children(
    course_id: impl AsRef<str>,
    paging: &PageOptions,
) -> Result<RestCall<JsonFormat<Page<CourseChild>>>, ApiError> {
    RestCall::builder(get_children_endpoint())
        .path_param("courseId", course_id.as_ref())
        .query_params(paging)
        .build()
}

pub fn endpoints() -> Vec<EndpointSpec> {
    [
        list_courses_endpoint().spec(),
        create_course_endpoint().spec(),
        get_course_endpoint().spec(),
        update_course_endpoint().spec(),
        delete_course_endpoint().spec(),
        get_children_endpoint().spec(),
    ]
    .into_iter()
    .map(|spec| spec.with_tag("courses"))
    .collect()
}
