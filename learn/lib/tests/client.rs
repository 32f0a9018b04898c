//! End-to-end behavior of `LearnClient` against a mock LMS.

use learn_lib::memberships::{self, MembershipListOptions};
use learn_lib::users::{self, User, UserListOptions};
use learn_lib::courses::{CourseListOptions, UltraStatus};
use learn_lib::{courses, oauth, Id, LearnClient, LearnConfig, PageOptions};
use pretty_assertions::assert_eq;
use rest_call::{ApiError, ClientError};
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{
    any, body_string, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERS: &str = "/learn/api/public/v1/users";

fn config(server: &MockServer) -> LearnConfig {
    LearnConfig::new(Url::parse(&server.uri()).unwrap())
}

fn user(id: &str) -> Value {
    json!({ "id": id, "userName": format!("user{id}") })
}

fn page(results: Vec<Value>, next: Option<&str>) -> ResponseTemplate {
    let mut body = json!({ "results": results });
    if let Some(next) = next {
        body["paging"] = json!({ "nextPage": next });
    }
    ResponseTemplate::new(200).set_body_json(body)
}

async fn token_client(server: &MockServer) -> LearnClient {
    LearnClient::connect(&config(server).with_access_token("tok"))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_token_exchange_then_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(oauth::TOKEN_PATH))
        .and(header("authorization", "Basic a2V5OnNlY3JldA=="))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "issued-token",
            "token_type": "bearer",
            "expires_in": 3599
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/learn/api/public/v3/courses/courseId:BIO-101"))
        .and(header("authorization", "Bearer issued-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "_7_1",
            "courseId": "BIO-101",
            "name": "Intro to Biology"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = LearnClient::connect(&config(&server).with_app_credentials("key", "secret"))
        .await
        .unwrap();
    let course = client
        .execute(&courses::get_course(Id::course_id("BIO-101")).unwrap())
        .await
        .unwrap();

    assert_eq!(course.name, "Intro to Biology");
}

#[tokio::test]
async fn test_access_token_skips_exchange() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(oauth::TOKEN_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/learn/api/public/v1/users/userName:jdoe"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("_5_1")))
        .expect(1)
        .mount(&server)
        .await;

    let client = LearnClient::connect(
        &config(&server)
            .with_app_credentials("key", "secret")
            .with_access_token("tok"),
    )
    .await
    .unwrap();
    let user = client
        .execute(&users::get_user(Id::user_name("jdoe")).unwrap())
        .await
        .unwrap();

    assert_eq!(user.id, "_5_1");
}

#[tokio::test]
async fn test_collect_all_follows_next_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("offset"))
        .respond_with(page(
            vec![user("_1_1"), user("_2_1")],
            Some("/learn/api/public/v1/users?limit=2&offset=2"),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(USERS))
        .and(query_param("offset", "2"))
        .respond_with(page(
            vec![user("_3_1"), user("_4_1")],
            Some("/learn/api/public/v1/users?limit=2&offset=4"),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(USERS))
        .and(query_param("offset", "4"))
        .respond_with(page(vec![user("_5_1")], None))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server).await;
    let call = users::list_users(&UserListOptions {
        paging: PageOptions::limit(2),
        ..UserListOptions::default()
    })
    .unwrap();
    let all: Vec<User> = client.collect_all(call, 10).await.unwrap();

    let ids: Vec<&str> = all.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["_1_1", "_2_1", "_3_1", "_4_1", "_5_1"]);
}

#[tokio::test]
#[tracing_test::traced_test]
async fn test_collect_all_stops_at_max_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/learn/api/public/v1/courses/_7_1/users"))
        .and(query_param_is_missing("offset"))
        .respond_with(page(
            vec![json!({ "userId": "_1_1", "courseId": "_7_1" })],
            Some("/learn/api/public/v1/courses/_7_1/users?offset=1"),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/learn/api/public/v1/courses/_7_1/users"))
        .and(query_param("offset", "1"))
        .respond_with(page(vec![], None))
        .expect(0)
        .mount(&server)
        .await;

    let client = token_client(&server).await;
    let call =
        memberships::list_course_memberships("_7_1", &MembershipListOptions::default()).unwrap();
    let members = client.collect_all(call, 1).await.unwrap();

    assert_eq!(members.len(), 1);
    assert!(logs_contain("stopped paging before the last page"));
}

#[tokio::test]
async fn test_zero_max_pages_still_fetches_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS))
        .respond_with(page(vec![user("_1_1")], None))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server).await;
    let all = client
        .collect_all(users::list_users(&UserListOptions::default()).unwrap(), 0)
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_not_found_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/learn/api/public/v3/courses/externalId:GONE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "code": "bb-rest-course-not-found",
            "message": "Course not found"
        })))
        .mount(&server)
        .await;

    let client = token_client(&server).await;
    let err = client
        .execute(&courses::get_course(Id::external("GONE")).unwrap())
        .await
        .unwrap_err();

    let ApiError::Client(client_err) = &err else {
        panic!("expected a client error, got {err:?}");
    };
    assert!(client_err.is_not_found());
    assert!(matches!(
        client_err,
        ClientError::HttpStatus { code: Some(code), message, .. }
            if code == "bb-rest-course-not-found" && message == "Course not found"
    ));
}

#[tokio::test]
async fn test_malformed_next_page_link() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS))
        .respond_with(page(vec![user("_1_1")], Some("https://elsewhere.example/users")))
        .mount(&server)
        .await;

    let client = token_client(&server).await;
    let err = client
        .collect_all(users::list_users(&UserListOptions::default()).unwrap(), 5)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Config(rest_call::ConfigError::InvalidPathTemplate { .. })
    ));
}

#[tokio::test]
async fn test_next_page_link_to_other_host_never_sends_token() {
    let foreign = MockServer::start().await;
    Mock::given(any())
        .respond_with(page(vec![user("_9_9")], None))
        .expect(0)
        .mount(&foreign)
        .await;
    let port = foreign.address().port();

    for link in [
        format!("//127.0.0.1:{port}/steal"),
        format!("/\\127.0.0.1:{port}/steal"),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(USERS))
            .respond_with(page(vec![user("_1_1")], Some(link.as_str())))
            .expect(1)
            .mount(&server)
            .await;

        let client = token_client(&server).await;
        let err = client
            .collect_all(users::list_users(&UserListOptions::default()).unwrap(), 5)
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                ApiError::Config(rest_call::ConfigError::InvalidPathTemplate { .. })
            ),
            "{link} was followed"
        );
    }
}

#[tokio::test]
async fn test_list_courses_decodes_page_of_courses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/learn/api/public/v3/courses"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(page(
            vec![
                json!({ "id": "_7_1", "courseId": "BIO-101", "name": "Biology", "ultraStatus": "Ultra" }),
                json!({
                    "id": "_7_2",
                    "courseId": "BIO-102",
                    "name": "Genetics",
                    "ultraStatus": "SomethingNewer",
                    "availability": { "available": "Archived" }
                }),
            ],
            Some("/learn/api/public/v3/courses?offset=2"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = token_client(&server).await;
    let page = client
        .execute(&courses::list_courses(&CourseListOptions::default()).unwrap())
        .await
        .unwrap();

    let ids: Vec<&str> = page.results.iter().map(|c| c.course_id.as_str()).collect();
    assert_eq!(ids, ["BIO-101", "BIO-102"]);
    assert_eq!(page.results[0].ultra_status, Some(UltraStatus::Ultra));
    assert_eq!(page.results[1].ultra_status, Some(UltraStatus::Unknown));
    assert_eq!(page.next_page(), Some("/learn/api/public/v3/courses?offset=2"));
}
