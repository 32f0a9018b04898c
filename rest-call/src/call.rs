//! Request descriptors: [`RestCallBuilder`] and [`RestCall`].
//!
//! A [`RestCall`] is everything needed to issue one request against an
//! [`Endpoint`]: the rendered path, the query pairs, an optional body and any
//! call-specific headers. It carries the endpoint's response format in its
//! type so [`ApiClient::execute`](crate::ApiClient::execute) knows how to
//! decode the answer.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::{ApiError, ConfigError};
use crate::method::RestMethod;
use crate::query::{self, QueryPairs};
use crate::response::ResponseFormat;

/// A serialized request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// `application/json`.
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded`.
    Form(QueryPairs),
}

impl RequestBody {
    /// The Content-Type the body is sent with.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Form(_) => "application/x-www-form-urlencoded",
        }
    }
}

/// A fully bound request against one endpoint.
///
/// ## Examples
///
/// ```rust
/// use rest_call::{Endpoint, RestCall, RestMethod};
/// use rest_call::response::EmptyFormat;
///
/// let endpoint: Endpoint<EmptyFormat> = Endpoint::builder()
///     .id("deleteMembership")
///     .method(RestMethod::Delete)
///     .path("/learn/api/public/v1/courses/{courseId}/users/{userId}")
///     .build();
///
/// let call = RestCall::builder(endpoint)
///     .path_param("courseId", "_3_1")
///     .path_param("userId", "externalId:u/42")
///     .build()
///     .unwrap();
///
/// assert_eq!(call.method(), RestMethod::Delete);
/// assert_eq!(call.path(), "/learn/api/public/v1/courses/_3_1/users/externalId:u%2F42");
/// ```
pub struct RestCall<F: ResponseFormat> {
    id: String,
    method: RestMethod,
    template: String,
    path: String,
    query: QueryPairs,
    body: Option<RequestBody>,
    headers: Vec<(String, String)>,
    entitlements: Vec<String>,
    _format: PhantomData<F>,
}

impl<F: ResponseFormat> Clone for RestCall<F> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            method: self.method,
            template: self.template.clone(),
            path: self.path.clone(),
            query: self.query.clone(),
            body: self.body.clone(),
            headers: self.headers.clone(),
            entitlements: self.entitlements.clone(),
            _format: PhantomData,
        }
    }
}

impl<F: ResponseFormat> fmt::Debug for RestCall<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestCall")
            .field("id", &self.id)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("body", &self.body)
            .field("headers", &self.headers)
            .finish()
    }
}

impl<F: ResponseFormat> RestCall<F> {
    /// Starts binding a call against `endpoint`.
    pub fn builder(endpoint: Endpoint<F>) -> RestCallBuilder<F> {
        RestCallBuilder::new(endpoint)
    }

    /// The endpoint id (used as the operation name in logs and errors).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// The unrendered path template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The rendered, percent-encoded path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in the order they were added.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the first value of a query parameter.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The serialized body, if any.
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Call-specific headers.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Entitlements documented for the endpoint.
    pub fn entitlements(&self) -> &[String] {
        &self.entitlements
    }

    /// Resolves the absolute URL against `base_url`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the base URL cannot be joined,
    /// or [`ConfigError::InvalidPathTemplate`] if the joined URL would leave
    /// the base URL's scheme, host or port.
    pub fn url(&self, base_url: &Url) -> Result<Url, ConfigError> {
        let mut url = base_url.join(&self.path)?;
        if url.origin() != base_url.origin() {
            return Err(ConfigError::invalid_path(format!(
                "path resolves outside {}: {}",
                base_url.origin().ascii_serialization(),
                self.path
            )));
        }
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    /// Re-targets this call at a server-provided relative link.
    ///
    /// List endpoints answer with a link such as
    /// `/learn/api/public/v1/users?offset=100&limit=100` for the next page.
    /// The returned call keeps the method, id, headers and response format;
    /// its path and query come from the link.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidPathTemplate`] if the link is not an
    /// absolute path on the same host. Protocol-relative links (`//host/..`)
    /// and paths containing `\` (read as `/` by URL parsing) are refused.
    pub fn follow(&self, link: &str) -> Result<Self, ConfigError> {
        let link = link.trim();
        if !link.starts_with('/') {
            return Err(ConfigError::invalid_path(format!(
                "link must be an absolute path: {link}"
            )));
        }

        let (path, query) = match link.split_once('?') {
            Some((path, query)) => (path, query),
            None => (link, ""),
        };
        if path.starts_with("//") || path.contains('\\') {
            return Err(ConfigError::invalid_path(format!(
                "link must stay on the same host: {link}"
            )));
        }
        let query = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Self {
            path: path.to_string(),
            query,
            ..self.clone()
        })
    }
}

/// Builder that binds path parameters, query options and a body to an
/// endpoint.
///
/// Problems found while chaining (a body that fails to serialize, an options
/// struct with a nested object) are remembered and reported by
/// [`build`](Self::build); the first one wins.
pub struct RestCallBuilder<F: ResponseFormat> {
    endpoint: Endpoint<F>,
    path_params: Vec<(String, String)>,
    query: QueryPairs,
    body: Option<RequestBody>,
    headers: Vec<(String, String)>,
    error: Option<ConfigError>,
}

impl<F: ResponseFormat> RestCallBuilder<F> {
    fn new(endpoint: Endpoint<F>) -> Self {
        Self {
            endpoint,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
            error: None,
        }
    }

    fn fail(&mut self, err: ConfigError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Binds a value to a `{name}` placeholder.
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Appends a query parameter when `value` is `Some`.
    pub fn query_opt<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Appends every set field of an options struct as query parameters.
    ///
    /// See [`query::to_pairs`] for the flattening rules.
    pub fn query_params<T: Serialize + ?Sized>(mut self, options: &T) -> Self {
        match query::to_pairs(options) {
            Ok(pairs) => self.query.extend(pairs),
            Err(e) => self.fail(e),
        }
        self
    }

    /// Serializes `body` as the JSON request body.
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(RequestBody::Json(value)),
            Err(e) => self.fail(ConfigError::InvalidBody(e)),
        }
        self
    }

    /// Serializes `fields` as a URL-encoded form body.
    pub fn form_body<T: Serialize + ?Sized>(mut self, fields: &T) -> Self {
        match query::to_pairs(fields) {
            Ok(pairs) => self.body = Some(RequestBody::Form(pairs)),
            Err(e) => self.fail(e),
        }
        self
    }

    /// Adds a header sent with this call only.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Renders the path and produces the call.
    ///
    /// ## Errors
    ///
    /// - any error deferred while chaining
    /// - path template and parameter errors (see [`PathTemplate::render`](crate::PathTemplate::render))
    /// - [`ConfigError::UnexpectedBody`] when a body is attached to a method without one
    pub fn build(self) -> Result<RestCall<F>, ApiError> {
        if let Some(err) = self.error {
            return Err(err.into());
        }

        let method = self.endpoint.method();
        if self.body.is_some() && !method.has_body() {
            return Err(ConfigError::UnexpectedBody { method }.into());
        }

        let path = self.endpoint.template()?.render(&self.path_params)?;
        debug!(endpoint = self.endpoint.id(), %method, %path, "built rest call");

        Ok(RestCall {
            id: self.endpoint.id().to_string(),
            method,
            template: self.endpoint.path().to_string(),
            path,
            query: self.query,
            body: self.body,
            headers: self.headers,
            entitlements: self.endpoint.entitlements().to_vec(),
            _format: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{EmptyFormat, JsonFormat};
    use pretty_assertions::assert_eq;

    #[derive(Debug, serde::Deserialize)]
    struct Course {
        #[allow(dead_code)]
        id: String,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct CourseBody {
        course_id: String,
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    }

    fn get_course() -> Endpoint<JsonFormat<Course>> {
        Endpoint::builder()
            .id("getCourse")
            .method(RestMethod::Get)
            .path("/learn/api/public/v3/courses/{courseId}")
            .entitlement("system.course.VIEW")
            .build()
    }

    fn create_course() -> Endpoint<JsonFormat<Course>> {
        Endpoint::builder()
            .id("createCourse")
            .method(RestMethod::Post)
            .path("/learn/api/public/v3/courses")
            .build()
    }

    #[test]
    fn test_build_binds_path_and_query() {
        let call = RestCall::builder(get_course())
            .path_param("courseId", "courseId:HIST 201")
            .query("fields", "id,name")
            .query_opt("expand", None::<&str>)
            .query_opt("limit", Some(10))
            .build()
            .unwrap();

        assert_eq!(call.id(), "getCourse");
        assert_eq!(call.template(), "/learn/api/public/v3/courses/{courseId}");
        assert_eq!(call.path(), "/learn/api/public/v3/courses/courseId:HIST%20201");
        assert_eq!(
            call.query(),
            [
                ("fields".to_string(), "id,name".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
        assert_eq!(call.query_value("limit"), Some("10"));
        assert_eq!(call.entitlements(), ["system.course.VIEW"]);
        assert!(call.body().is_none());
    }

    #[test]
    fn test_url_encodes_query() {
        let call = RestCall::builder(get_course())
            .path_param("courseId", "_1_1")
            .query("name", "Intro & Basics")
            .build()
            .unwrap();

        let base = Url::parse("https://lms.example.edu").unwrap();
        assert_eq!(
            call.url(&base).unwrap().as_str(),
            "https://lms.example.edu/learn/api/public/v3/courses/_1_1?name=Intro+%26+Basics"
        );
    }

    #[test]
    fn test_url_without_query_has_no_question_mark() {
        let call = RestCall::builder(get_course())
            .path_param("courseId", "_1_1")
            .build()
            .unwrap();
        let base = Url::parse("https://lms.example.edu/").unwrap();
        assert_eq!(
            call.url(&base).unwrap().as_str(),
            "https://lms.example.edu/learn/api/public/v3/courses/_1_1"
        );
    }

    #[test]
    fn test_json_body() {
        let call = RestCall::builder(create_course())
            .json_body(&CourseBody {
                course_id: "CHEM-101".to_string(),
                name: "Chemistry".to_string(),
                description: None,
            })
            .build()
            .unwrap();

        assert_eq!(
            call.body(),
            Some(&RequestBody::Json(serde_json::json!({
                "courseId": "CHEM-101",
                "name": "Chemistry"
            })))
        );
        assert_eq!(call.body().unwrap().content_type(), "application/json");
    }

    #[test]
    fn test_form_body() {
        let endpoint: Endpoint<JsonFormat<Course>> = Endpoint::builder()
            .id("requestToken")
            .method(RestMethod::Post)
            .path("/learn/api/public/v1/oauth2/token")
            .build();

        let call = RestCall::builder(endpoint)
            .form_body(&[("grant_type", "client_credentials")].into_iter().collect::<std::collections::BTreeMap<_, _>>())
            .build()
            .unwrap();

        assert_eq!(
            call.body(),
            Some(&RequestBody::Form(vec![(
                "grant_type".to_string(),
                "client_credentials".to_string()
            )]))
        );
    }

    #[test]
    fn test_body_rejected_for_get_and_delete() {
        let err = RestCall::builder(get_course())
            .path_param("courseId", "_1_1")
            .json_body(&serde_json::json!({"name": "x"}))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Config(ConfigError::UnexpectedBody {
                method: RestMethod::Get
            })
        ));

        let delete: Endpoint<EmptyFormat> = Endpoint::builder()
            .id("deleteTerm")
            .method(RestMethod::Delete)
            .path("/learn/api/public/v1/terms/{termId}")
            .build();
        let err = RestCall::builder(delete)
            .path_param("termId", "_1_1")
            .form_body(&serde_json::json!({"a": "b"}))
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(ConfigError::UnexpectedBody { .. })));
    }

    #[test]
    fn test_missing_path_param_surfaces_on_build() {
        let err = RestCall::builder(get_course()).build().unwrap_err();
        assert!(matches!(
            err,
            ApiError::Config(ConfigError::MissingPathParam { ref name }) if name == "courseId"
        ));
    }

    #[test]
    fn test_first_deferred_error_wins() {
        let err = RestCall::builder(create_course())
            .query_params(&serde_json::json!({"nested": {"a": 1}}))
            .query_params(&7)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("nested"));
    }

    #[test]
    fn test_follow_next_page_link() {
        let call = RestCall::builder(get_course())
            .path_param("courseId", "_1_1")
            .query("limit", 2)
            .header("X-Trace", "abc")
            .build()
            .unwrap();

        let next = call
            .follow("/learn/api/public/v3/courses?offset=2&limit=2&name=a%20b")
            .unwrap();
        assert_eq!(next.id(), "getCourse");
        assert_eq!(next.method(), RestMethod::Get);
        assert_eq!(next.path(), "/learn/api/public/v3/courses");
        assert_eq!(
            next.query(),
            [
                ("offset".to_string(), "2".to_string()),
                ("limit".to_string(), "2".to_string()),
                ("name".to_string(), "a b".to_string()),
            ]
        );
        assert_eq!(next.headers(), [("X-Trace".to_string(), "abc".to_string())]);
    }

    #[test]
    fn test_follow_rejects_absolute_url() {
        let call = RestCall::builder(create_course()).build().unwrap();
        assert!(call.follow("https://elsewhere.example/x").is_err());
    }

    #[test]
    fn test_follow_rejects_links_to_other_hosts() {
        let call = RestCall::builder(create_course()).build().unwrap();
        for link in [
            "//evil.example/steal",
            "//evil.example",
            "/\\evil.example/steal",
            "/learn\\..\\..\\x",
            "  //evil.example/steal?offset=1",
        ] {
            let err = call.follow(link).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidPathTemplate { .. }),
                "{link:?} was accepted"
            );
        }
    }

    #[test]
    fn test_follow_keeps_slashes_inside_query() {
        let call = RestCall::builder(create_course()).build().unwrap();
        let next = call
            .follow("/learn/api/public/v3/courses?cursor=//a\\b")
            .unwrap();
        assert_eq!(next.path(), "/learn/api/public/v3/courses");
        assert_eq!(next.query_value("cursor"), Some("//a\\b"));
    }

    #[test]
    fn test_url_refuses_other_origin() {
        let call = RestCall::builder(create_course()).build().unwrap();
        let base = Url::parse("https://lms.example.edu").unwrap();

        let mut escaped = call.clone();
        escaped.path = "//evil.example/steal".to_string();
        assert!(matches!(
            escaped.url(&base),
            Err(ConfigError::InvalidPathTemplate { .. })
        ));

        escaped.path = "/\\evil.example/steal".to_string();
        assert!(escaped.url(&base).is_err());

        assert_eq!(
            call.url(&base).unwrap().as_str(),
            "https://lms.example.edu/learn/api/public/v3/courses"
        );
    }
}
