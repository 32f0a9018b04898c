//! User accounts.
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getUsers | GET | /learn/api/public/v1/users |
//! | createUser | POST | /learn/api/public/v1/users |
//! | getUser | GET | /learn/api/public/v1/users/{userId} |
//! | updateUser | PATCH | /learn/api/public/v1/users/{userId} |
//! | deleteUser | DELETE | /learn/api/public/v1/users/{userId} |

mod types;

pub use types::*;

use rest_call::openapi::EndpointSpec;
use rest_call::response::{EmptyFormat, JsonFormat};
use rest_call::{ApiError, Endpoint, RestCall, RestMethod};

use crate::common::{Page, endpoint};

const USERS: &str = "/learn/api/public/v1/users";
const USER: &str = "/learn/api/public/v1/users/{userId}";

fn list_users_endpoint() -> Endpoint<JsonFormat<Page<User>>> {
    endpoint("getUsers", RestMethod::Get, USERS)
        .description("Returns a list of users")
        .entitlement("system.user.VIEW")
        .query_options(&UserListOptions::NAMES)
        .build()
}

fn create_user_endpoint() -> Endpoint<JsonFormat<User>> {
    endpoint("createUser", RestMethod::Post, USERS)
        .description("Creates a user")
        .entitlement("system.user.CREATE")
        .build()
}

fn get_user_endpoint() -> Endpoint<JsonFormat<User>> {
    endpoint("getUser", RestMethod::Get, USER)
        .description("Loads a user")
        .entitlement("system.user.VIEW")
        .query_options(&["fields"])
        .build()
}

fn update_user_endpoint() -> Endpoint<JsonFormat<User>> {
    endpoint("updateUser", RestMethod::Patch, USER)
        .description("Updates a user")
        .entitlement("system.user.EDIT")
        .build()
}

fn delete_user_endpoint() -> Endpoint<EmptyFormat> {
    endpoint("deleteUser", RestMethod::Delete, USER)
        .description("Deletes a user")
        .entitlement("system.user.DELETE")
        .build()
}

pub fn list_users(options: &UserListOptions) -> Result<RestCall<JsonFormat<Page<User>>>, ApiError> {
    RestCall::builder(list_users_endpoint())
        .query_params(options)
        .build()
}

pub fn create_user(user: &UserInput) -> Result<RestCall<JsonFormat<User>>, ApiError> {
    RestCall::builder(create_user_endpoint()).json_body(user).build()
}

/// `GET /learn/api/public/v1/users/{userId}`
///
/// ## Examples
///
/// ```rust
/// use learn_lib::{Id, users};
///
/// let call = users::get_user(Id::user_name("j.doe@example.edu")).unwrap();
/// assert_eq!(call.path(), "/learn/api/public/v1/users/userName:j.doe@example.edu");
/// ```
pub fn get_user(user_id: impl AsRef<str>) -> Result<RestCall<JsonFormat<User>>, ApiError> {
    RestCall::builder(get_user_endpoint())
        .path_param("userId", user_id.as_ref())
        .build()
}

pub fn update_user(
    user_id: impl AsRef<str>,
    user: &UserInput,
) -> Result<RestCall<JsonFormat<User>>, ApiError> {
    RestCall::builder(update_user_endpoint())
        .path_param("userId", user_id.as_ref())
        .json_body(user)
        .build()
}

pub fn delete_user(user_id: impl AsRef<str>) -> Result<RestCall<EmptyFormat>, ApiError> {
    RestCall::builder(delete_user_endpoint())
        .path_param("userId", user_id.as_ref())
        .build()
}

pub fn endpoints() -> Vec<EndpointSpec> {
    [
        list_users_endpoint().spec(),
        create_user_endpoint().spec(),
        get_user_endpoint().spec(),
        update_user_endpoint().spec(),
        delete_user_endpoint().spec(),
    ]
    .into_iter()
    .map(|spec| spec.with_tag("users"))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Id;
    use crate::common::PageOptions;
    use pretty_assertions::assert_eq;
    use rest_call::{ApiError, ConfigError, RequestBody};

    #[test]
    fn test_list_users_renamed_filters() {
        let call = list_users(&UserListOptions {
            family_name: Some("O'Brien".into()),
            user_name: Some("ob".into()),
            paging: PageOptions {
                offset: Some(100),
                ..PageOptions::default()
            },
            ..UserListOptions::default()
        })
        .unwrap();

        assert_eq!(
            call.query(),
            [
                ("userName".to_string(), "ob".to_string()),
                ("name.family".to_string(), "O'Brien".to_string()),
                ("offset".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_get_user_by_uuid() {
        let call = get_user(Id::uuid("9a7c-11")).unwrap();
        assert_eq!(call.path(), "/learn/api/public/v1/users/uuid:9a7c-11");
    }

    #[test]
    fn test_empty_user_id_rejected() {
        let err = get_user("").unwrap_err();
        assert!(matches!(
            err,
            ApiError::Config(ConfigError::EmptyPathParam { ref name }) if name == "userId"
        ));
    }

    #[test]
    fn test_dot_segment_user_id_cannot_retarget_delete() {
        for id in [".", ".."] {
            let err = delete_user(id).unwrap_err();
            assert!(matches!(
                err,
                ApiError::Config(ConfigError::DotSegmentPathParam { ref name }) if name == "userId"
            ));
        }
    }

    #[test]
    fn test_create_user_body() {
        let call = create_user(&UserInput {
            user_name: Some("jdoe".into()),
            password: Some("s3cret!".into()),
            name: Some(UserName {
                given: "Jane".into(),
                family: "Doe".into(),
                ..UserName::default()
            }),
            contact: Some(Contact {
                email: Some("jdoe@example.edu".into()),
                ..Contact::default()
            }),
            ..UserInput::default()
        })
        .unwrap();

        assert_eq!(
            call.body(),
            Some(&RequestBody::Json(serde_json::json!({
                "userName": "jdoe",
                "password": "s3cret!",
                "name": { "given": "Jane", "family": "Doe" },
                "contact": { "email": "jdoe@example.edu" }
            })))
        );
    }

    #[test]
    fn test_user_deserializes() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "_5_1",
            "userName": "jdoe",
            "externalId": "1001",
            "institutionRoleIds": ["STUDENT"],
            "systemRoleIds": ["User"],
            "availability": { "available": "Yes" },
            "name": { "given": "Jane", "family": "Doe", "preferredDisplayName": "GivenName" },
            "lastLogin": "2026-10-01T08:30:00.000Z"
        }))
        .unwrap();

        assert_eq!(user.user_name, "jdoe");
        assert_eq!(user.institution_role_ids, vec!["STUDENT"]);
        assert_eq!(user.name.unwrap().display(), "Jane Doe");
        assert!(user.last_login.is_some());
    }
}
