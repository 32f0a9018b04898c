//! Gradebook columns and the grades recorded in them.
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getGradeColumns | GET | /learn/api/public/v2/courses/{courseId}/gradebook/columns |
//! | createGradeColumn | POST | /learn/api/public/v2/courses/{courseId}/gradebook/columns |
//! | getGradeColumn | GET | /learn/api/public/v2/courses/{courseId}/gradebook/columns/{columnId} |
//! | updateGradeColumn | PATCH | /learn/api/public/v2/courses/{courseId}/gradebook/columns/{columnId} |
//! | deleteGradeColumn | DELETE | /learn/api/public/v2/courses/{courseId}/gradebook/columns/{columnId} |
//! | getColumnGrades | GET | /learn/api/public/v2/courses/{courseId}/gradebook/columns/{columnId}/users |
//! | getColumnGrade | GET | /learn/api/public/v2/courses/{courseId}/gradebook/columns/{columnId}/users/{userId} |
//! | updateColumnGrade | PATCH | /learn/api/public/v2/courses/{courseId}/gradebook/columns/{columnId}/users/{userId} |

mod types;

pub use types::*;

use rest_call::openapi::EndpointSpec;
use rest_call::response::{EmptyFormat, JsonFormat};
use rest_call::{ApiError, Endpoint, RestCall, RestMethod};

use crate::common::{Page, PageOptions, endpoint};

const COLUMNS: &str = "/learn/api/public/v2/courses/{courseId}/gradebook/columns";
const COLUMN: &str = "/learn/api/public/v2/courses/{courseId}/gradebook/columns/{columnId}";
const GRADES: &str = "/learn/api/public/v2/courses/{courseId}/gradebook/columns/{columnId}/users";
const GRADE: &str =
    "/learn/api/public/v2/courses/{courseId}/gradebook/columns/{columnId}/users/{userId}";

fn list_columns_endpoint() -> Endpoint<JsonFormat<Page<GradeColumn>>> {
    endpoint("getGradeColumns", RestMethod::Get, COLUMNS)
        .description("Returns the grade columns of a course")
        .entitlement("course.gradebook.MODIFY")
        .query_options(&ColumnListOptions::NAMES)
        .build()
}

fn create_column_endpoint() -> Endpoint<JsonFormat<GradeColumn>> {
    endpoint("createGradeColumn", RestMethod::Post, COLUMNS)
        .description("Creates a manual grade column")
        .entitlement("course.gradebook.MODIFY")
        .build()
}

fn get_column_endpoint() -> Endpoint<JsonFormat<GradeColumn>> {
    endpoint("getGradeColumn", RestMethod::Get, COLUMN)
        .description("Loads a grade column")
        .entitlement("course.gradebook.MODIFY")
        .query_options(&["fields"])
        .build()
}

fn update_column_endpoint() -> Endpoint<JsonFormat<GradeColumn>> {
    endpoint("updateGradeColumn", RestMethod::Patch, COLUMN)
        .description("Updates a grade column")
        .entitlement("course.gradebook.MODIFY")
        .build()
}

fn delete_column_endpoint() -> Endpoint<EmptyFormat> {
    endpoint("deleteGradeColumn", RestMethod::Delete, COLUMN)
        .description("Deletes a manual grade column")
        .entitlement("course.gradebook.MODIFY")
        .build()
}

fn list_grades_endpoint() -> Endpoint<JsonFormat<Page<Grade>>> {
    endpoint("getColumnGrades", RestMethod::Get, GRADES)
        .description("Returns every user's grade in a column")
        .entitlement("course.gradebook-grades.VIEW")
        .query_options(&PageOptions::NAMES)
        .build()
}

fn get_grade_endpoint() -> Endpoint<JsonFormat<Grade>> {
    endpoint("getColumnGrade", RestMethod::Get, GRADE)
        .description("Loads a user's grade in a column")
        .entitlement("course.gradebook-grades.VIEW")
        .query_options(&["fields"])
        .build()
}

fn update_grade_endpoint() -> Endpoint<JsonFormat<Grade>> {
    endpoint("updateColumnGrade", RestMethod::Patch, GRADE)
        .description("Updates a user's grade in a column")
        .entitlement("course.gradebook.MODIFY")
        .build()
}

pub fn list_columns(
    course_id: impl AsRef<str>,
    options: &ColumnListOptions,
) -> Result<RestCall<JsonFormat<Page<GradeColumn>>>, ApiError> {
    RestCall::builder(list_columns_endpoint())
        .path_param("courseId", course_id.as_ref())
        .query_params(options)
        .build()
}

pub fn create_column(
    course_id: impl AsRef<str>,
    column: &GradeColumnInput,
) -> Result<RestCall<JsonFormat<GradeColumn>>, ApiError> {
    RestCall::builder(create_column_endpoint())
        .path_param("courseId", course_id.as_ref())
        .json_body(column)
        .build()
}

pub fn get_column(
    course_id: impl AsRef<str>,
    column_id: impl AsRef<str>,
) -> Result<RestCall<JsonFormat<GradeColumn>>, ApiError> {
    RestCall::builder(get_column_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("columnId", column_id.as_ref())
        .build()
}

pub fn update_column(
    course_id: impl AsRef<str>,
    column_id: impl AsRef<str>,
    column: &GradeColumnInput,
) -> Result<RestCall<JsonFormat<GradeColumn>>, ApiError> {
    RestCall::builder(update_column_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("columnId", column_id.as_ref())
        .json_body(column)
        .build()
}

pub fn delete_column(
    course_id: impl AsRef<str>,
    column_id: impl AsRef<str>,
) -> Result<RestCall<EmptyFormat>, ApiError> {
    RestCall::builder(delete_column_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("columnId", column_id.as_ref())
        .build()
}

pub fn list_grades(
    course_id: impl AsRef<str>,
    column_id: impl AsRef<str>,
    paging: &PageOptions,
) -> Result<RestCall<JsonFormat<Page<Grade>>>, ApiError> {
    RestCall::builder(list_grades_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("columnId", column_id.as_ref())
        .query_params(paging)
        .build()
}

pub fn get_grade(
    course_id: impl AsRef<str>,
    column_id: impl AsRef<str>,
    user_id: impl AsRef<str>,
) -> Result<RestCall<JsonFormat<Grade>>, ApiError> {
    RestCall::builder(get_grade_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("columnId", column_id.as_ref())
        .path_param("userId", user_id.as_ref())
        .build()
}

/// Records a grade.
///
/// ## Examples
///
/// ```rust
/// use learn_lib::gradebook::{self, GradeInput};
/// use learn_lib::Id;
///
/// let call = gradebook::update_grade(
///     Id::course_id("BIO-101"),
///     "_88_1",
///     Id::user_name("jdoe"),
///     &GradeInput::score(87.5),
/// )
/// .unwrap();
///
/// assert_eq!(
///     call.path(),
///     "/learn/api/public/v2/courses/courseId:BIO-101/gradebook/columns/_88_1/users/userName:jdoe"
/// );
/// ```
pub fn update_grade(
    course_id: impl AsRef<str>,
    column_id: impl AsRef<str>,
    user_id: impl AsRef<str>,
    grade: &GradeInput,
) -> Result<RestCall<JsonFormat<Grade>>, ApiError> {
    RestCall::builder(update_grade_endpoint())
        .path_param("courseId", course_id.as_ref())
        .path_param("columnId", column_id.as_ref())
        .path_param("userId", user_id.as_ref())
        .json_body(grade)
        .build()
}

pub fn endpoints() -> Vec<EndpointSpec> {
    [
        list_columns_endpoint().spec(),
        create_column_endpoint().spec(),
        get_column_endpoint().spec(),
        update_column_endpoint().spec(),
        delete_column_endpoint().spec(),
        list_grades_endpoint().spec(),
        get_grade_endpoint().spec(),
        update_grade_endpoint().spec(),
    ]
    .into_iter()
    .map(|spec| spec.with_tag("gradebook"))
    .collect()
}
