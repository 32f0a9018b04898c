//! Endpoint definition with type-state builder pattern.
//!
//! The [`Endpoint`] struct represents a single REST API endpoint with its
//! method, path template and response format. The [`EndpointBuilder`] uses a
//! type-state pattern to ensure all required fields are set at compile time.

use std::marker::PhantomData;

use crate::error::ConfigError;
use crate::method::RestMethod;
use crate::openapi::EndpointSpec;
use crate::path::PathTemplate;
use crate::response::ResponseFormat;

/// Marker traits for builder state tracking.
pub mod builder_state {
    /// Marker for a field that has not been set.
    pub struct Missing;
    /// Marker for a field that has been set.
    pub struct Present;
}

use builder_state::{Missing, Present};

/// A REST API endpoint definition.
///
/// Endpoints are parameterized by their response format, enabling type-safe
/// response handling at compile time.
///
/// ## Type Parameters
///
/// - `F`: The [`ResponseFormat`] implementation for this endpoint's response.
///
/// ## Examples
///
/// ```rust
/// use rest_call::{Endpoint, RestMethod};
/// use rest_call::response::JsonFormat;
///
/// #[derive(serde::Deserialize)]
/// struct User { id: String, user_name: String }
///
/// let endpoint: Endpoint<JsonFormat<User>> = Endpoint::builder()
///     .id("getUser")
///     .method(RestMethod::Get)
///     .path("/learn/api/public/v1/users/{userId}")
///     .description("Loads a user")
///     .entitlement("system.user.VIEW")
///     .build();
///
/// assert_eq!(endpoint.path_params(), vec!["userId"]);
/// assert_eq!(endpoint.entitlements(), ["system.user.VIEW"]);
/// ```
#[derive(Debug)]
pub struct Endpoint<F: ResponseFormat> {
    /// Unique identifier for this endpoint.
    id: String,
    /// HTTP method for this endpoint.
    method: RestMethod,
    /// URL path template (may contain `{param}` placeholders).
    path: String,
    /// Optional description of what this endpoint does.
    description: Option<String>,
    /// Entitlements the server documents for this endpoint.
    entitlements: Vec<String>,
    /// Names of the query options the endpoint accepts.
    query_options: Vec<String>,
    /// Whether the endpoint is deprecated upstream.
    deprecated: bool,
    /// Phantom data for the response format type.
    _format: PhantomData<F>,
}

// Manual Clone implementation - PhantomData<F> is always Clone
impl<F: ResponseFormat> Clone for Endpoint<F> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            method: self.method,
            path: self.path.clone(),
            description: self.description.clone(),
            entitlements: self.entitlements.clone(),
            query_options: self.query_options.clone(),
            deprecated: self.deprecated,
            _format: PhantomData,
        }
    }
}

impl<F: ResponseFormat> Endpoint<F> {
    /// Creates a new endpoint builder.
    pub fn builder() -> EndpointBuilder<Missing, Missing, Missing, F> {
        EndpointBuilder::new()
    }

    /// Returns the endpoint's unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the HTTP method for this endpoint.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path template for this endpoint.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the documented entitlements.
    pub fn entitlements(&self) -> &[String] {
        &self.entitlements
    }

    /// Returns the documented query option names.
    pub fn query_options(&self) -> &[String] {
        &self.query_options
    }

    /// Returns `true` if the endpoint is marked deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Parses the path template.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidPathTemplate`] for a malformed template.
    pub fn template(&self) -> Result<PathTemplate, ConfigError> {
        PathTemplate::parse(&self.path)
    }

    /// Returns the full URL by combining a base URL with this endpoint's path.
    ///
    /// Only meaningful for templates without placeholders; use
    /// [`RestCall::url`](crate::RestCall::url) once parameters are bound.
    pub fn full_url(&self, base_url: &url::Url) -> Result<url::Url, url::ParseError> {
        base_url.join(&self.path)
    }

    /// Substitutes path parameters in the template, percent-encoding values.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let path = endpoint.substitute_params(&[("courseId", "_1_1"), ("userId", "_9_1")])?;
    /// // "/courses/{courseId}/users/{userId}" becomes "/courses/_1_1/users/_9_1"
    /// ```
    pub fn substitute_params(&self, params: &[(&str, &str)]) -> Result<String, ConfigError> {
        self.template()?.render(params)
    }

    /// Extracts path parameter names from the template.
    ///
    /// Returns parameter names in the order they appear in the path; a
    /// malformed template yields no names.
    pub fn path_params(&self) -> Vec<String> {
        self.template()
            .map(|t| t.params().into_iter().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Returns a type-erased description for catalogs and OpenAPI output.
    pub fn spec(&self) -> EndpointSpec {
        let mut spec = EndpointSpec::new(self.id.clone(), self.method, self.path.clone())
            .with_entitlements(self.entitlements.iter().cloned())
            .with_query_params(self.query_options.iter().cloned());
        if let Some(description) = &self.description {
            spec = spec.with_summary(description.clone());
        }
        if self.deprecated {
            spec = spec.deprecated();
        }
        spec
    }
}

/// Type-state builder for [`Endpoint`].
///
/// The builder uses phantom type parameters to track which required fields
/// have been set, preventing construction until all required fields are present.
///
/// ## Type Parameters
///
/// - `Id`: State of the ID field (`Missing` or `Present`).
/// - `Method`: State of the method field (`Missing` or `Present`).
/// - `Path`: State of the path field (`Missing` or `Present`).
/// - `F`: The response format type.
pub struct EndpointBuilder<Id, Method, Path, F: ResponseFormat> {
    id: Option<String>,
    method: Option<RestMethod>,
    path: Option<String>,
    description: Option<String>,
    entitlements: Vec<String>,
    query_options: Vec<String>,
    deprecated: bool,
    _phantom: PhantomData<(Id, Method, Path, F)>,
}

impl<F: ResponseFormat> EndpointBuilder<Missing, Missing, Missing, F> {
    /// Creates a new endpoint builder with no fields set.
    pub fn new() -> Self {
        Self {
            id: None,
            method: None,
            path: None,
            description: None,
            entitlements: Vec::new(),
            query_options: Vec::new(),
            deprecated: false,
            _phantom: PhantomData,
        }
    }
}

impl<F: ResponseFormat> Default for EndpointBuilder<Missing, Missing, Missing, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, M, P, F: ResponseFormat> EndpointBuilder<I, M, P, F> {
    /// Moves the collected fields into a builder with different state markers.
    fn transition<I2, M2, P2>(self) -> EndpointBuilder<I2, M2, P2, F> {
        EndpointBuilder {
            id: self.id,
            method: self.method,
            path: self.path,
            description: self.description,
            entitlements: self.entitlements,
            query_options: self.query_options,
            deprecated: self.deprecated,
            _phantom: PhantomData,
        }
    }
}

// ID setter - transitions Id from Missing to Present
impl<M, P, F: ResponseFormat> EndpointBuilder<Missing, M, P, F> {
    /// Sets the endpoint ID.
    ///
    /// The ID should be a unique identifier for this endpoint within the API.
    pub fn id(mut self, id: impl Into<String>) -> EndpointBuilder<Present, M, P, F> {
        self.id = Some(id.into());
        self.transition()
    }
}

// Method setter - transitions Method from Missing to Present
impl<I, P, F: ResponseFormat> EndpointBuilder<I, Missing, P, F> {
    /// Sets the HTTP method for this endpoint.
    pub fn method(mut self, method: RestMethod) -> EndpointBuilder<I, Present, P, F> {
        self.method = Some(method);
        self.transition()
    }
}

// Path setter - transitions Path from Missing to Present
impl<I, M, F: ResponseFormat> EndpointBuilder<I, M, Missing, F> {
    /// Sets the URL path template.
    ///
    /// The path may contain parameter placeholders like `{courseId}`.
    pub fn path(mut self, path: impl Into<String>) -> EndpointBuilder<I, M, Present, F> {
        self.path = Some(path.into());
        self.transition()
    }
}

// Optional setters - available in any state
impl<I, M, P, F: ResponseFormat> EndpointBuilder<I, M, P, F> {
    /// Sets an optional description for this endpoint.
    pub fn description(self, description: impl Into<String>) -> Self {
        EndpointBuilder {
            description: Some(description.into()),
            ..self
        }
    }

    /// Documents an entitlement the server requires (repeatable).
    pub fn entitlement(mut self, entitlement: impl Into<String>) -> Self {
        self.entitlements.push(entitlement.into());
        self
    }

    /// Documents the query options the endpoint accepts.
    pub fn query_options<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.query_options
            .extend(names.iter().map(|name| name.as_ref().to_string()));
        self
    }

    /// Marks the endpoint as deprecated upstream.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }
}

// Build method - only available when all required fields are Present
impl<F: ResponseFormat> EndpointBuilder<Present, Present, Present, F> {
    /// Builds the endpoint.
    ///
    /// This method is only available when all required fields (id, method, path)
    /// have been set.
    pub fn build(self) -> Endpoint<F> {
        Endpoint {
            id: self.id.unwrap_or_default(),
            method: self.method.unwrap_or(RestMethod::Get),
            path: self.path.unwrap_or_default(),
            description: self.description,
            entitlements: self.entitlements,
            query_options: self.query_options,
            deprecated: self.deprecated,
            _format: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{EmptyFormat, JsonFormat};

    #[derive(Debug, serde::Deserialize)]
    struct TestResponse {
        #[allow(dead_code)]
        data: String,
    }

    fn get_membership() -> Endpoint<JsonFormat<TestResponse>> {
        Endpoint::builder()
            .id("getMembership")
            .method(RestMethod::Get)
            .path("/learn/api/public/v1/courses/{courseId}/users/{userId}")
            .build()
    }

    #[test]
    fn test_builder_basic() {
        let endpoint: Endpoint<JsonFormat<TestResponse>> = Endpoint::builder()
            .id("getTerms")
            .method(RestMethod::Get)
            .path("/learn/api/public/v1/terms")
            .build();

        assert_eq!(endpoint.id(), "getTerms");
        assert_eq!(endpoint.method(), RestMethod::Get);
        assert_eq!(endpoint.path(), "/learn/api/public/v1/terms");
        assert_eq!(endpoint.description(), None);
        assert!(endpoint.entitlements().is_empty());
        assert!(!endpoint.is_deprecated());
    }

    #[test]
    fn test_builder_optional_fields() {
        let endpoint: Endpoint<EmptyFormat> = Endpoint::builder()
            .id("deleteCourse")
            .method(RestMethod::Delete)
            .path("/learn/api/public/v3/courses/{courseId}")
            .description("Deletes a course")
            .entitlement("system.course.DELETE")
            .entitlement("course.delete.EXECUTE")
            .deprecated()
            .build();

        assert_eq!(endpoint.description(), Some("Deletes a course"));
        assert_eq!(
            endpoint.entitlements(),
            ["system.course.DELETE", "course.delete.EXECUTE"]
        );
        assert!(endpoint.is_deprecated());
    }

    #[test]
    fn test_builder_order_independence() {
        // Fields can be set in any order
        let endpoint: Endpoint<JsonFormat<TestResponse>> = Endpoint::builder()
            .path("/learn/api/public/v1/system/version")
            .description("Version")
            .method(RestMethod::Get)
            .id("getVersion")
            .build();

        assert_eq!(endpoint.id(), "getVersion");
        assert_eq!(endpoint.description(), Some("Version"));
    }

    #[test]
    fn test_path_params() {
        assert_eq!(get_membership().path_params(), vec!["courseId", "userId"]);
    }

    #[test]
    fn test_substitute_params() {
        let path = get_membership()
            .substitute_params(&[("courseId", "courseId:BIO 110"), ("userId", "_42_1")])
            .unwrap();
        assert_eq!(
            path,
            "/learn/api/public/v1/courses/courseId:BIO%20110/users/_42_1"
        );
    }

    #[test]
    fn test_substitute_params_missing() {
        let err = get_membership()
            .substitute_params(&[("courseId", "_1_1")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingPathParam { .. }));
    }

    #[test]
    fn test_full_url() {
        let endpoint: Endpoint<JsonFormat<TestResponse>> = Endpoint::builder()
            .id("getUsers")
            .method(RestMethod::Get)
            .path("/learn/api/public/v1/users")
            .build();

        let base = url::Url::parse("https://lms.example.edu").unwrap();
        let full = endpoint.full_url(&base).unwrap();
        assert_eq!(full.as_str(), "https://lms.example.edu/learn/api/public/v1/users");
    }

    #[test]
    fn test_spec() {
        let endpoint: Endpoint<JsonFormat<TestResponse>> = Endpoint::builder()
            .id("getCourses")
            .method(RestMethod::Get)
            .path("/learn/api/public/v3/courses")
            .description("Returns a list of courses")
            .query_options(&["offset", "limit"])
            .build();

        let spec = endpoint.spec();
        assert_eq!(spec.id, "getCourses");
        assert_eq!(spec.summary.as_deref(), Some("Returns a list of courses"));
        assert_eq!(spec.query_params, vec!["offset", "limit"]);
    }

    #[test]
    fn test_clone() {
        let endpoint = get_membership();
        let cloned = endpoint.clone();
        assert_eq!(cloned.id(), endpoint.id());
        assert_eq!(cloned.path(), endpoint.path());
    }
}
