//! OpenAPI 3.x specification generator.
//!
//! [`OpenApiGenerator`] turns a catalog of [`EndpointSpec`]s into an OpenAPI
//! 3.1.0 document.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::auth::ApiAuthMethod;
use crate::method::RestMethod;
use crate::path::PathTemplate;

/// Serialization of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// The `info` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiInfo {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OpenApiInfo {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An entry of the `servers` list, normally the LMS root URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Type-erased description of an endpoint.
///
/// Obtained from [`Endpoint::spec`](crate::Endpoint::spec) so catalogs can be
/// listed and published without knowing each endpoint's response type.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSpec {
    /// Unique identifier for the endpoint (used as `operationId`).
    pub id: String,
    /// HTTP method for the endpoint.
    pub method: RestMethod,
    /// URL path template (may contain `{param}` placeholders).
    pub path: String,
    /// One-line summary.
    pub summary: Option<String>,
    /// Detailed description of the endpoint.
    pub description: Option<String>,
    /// Tags for grouping endpoints.
    pub tags: Vec<String>,
    /// Documented query option names.
    pub query_params: Vec<String>,
    /// Entitlements the server checks before serving the call.
    pub entitlements: Vec<String>,
    /// Whether the endpoint is deprecated.
    pub deprecated: bool,
}

impl EndpointSpec {
    /// Creates a new endpoint specification.
    pub fn new(id: impl Into<String>, method: RestMethod, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            method,
            path: path.into(),
            summary: None,
            description: None,
            tags: Vec::new(),
            query_params: Vec::new(),
            entitlements: Vec::new(),
            deprecated: false,
        }
    }

    /// Sets the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets tags (replacing any existing).
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the documented query option names.
    pub fn with_query_params(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.query_params = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the documented entitlements.
    pub fn with_entitlements(
        mut self,
        entitlements: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.entitlements = entitlements.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the endpoint as deprecated.
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Placeholder names in the path, in order.
    ///
    /// A malformed template yields no parameters.
    pub fn path_params(&self) -> Vec<String> {
        PathTemplate::parse(&self.path)
            .map(|t| t.params().into_iter().map(String::from).collect())
            .unwrap_or_default()
    }

    fn operation(&self) -> Value {
        let status = self.method.success_status();
        let description = match status {
            201 => "Created",
            204 => "No content",
            _ => "Successful response",
        };

        let mut responses = serde_json::Map::new();
        responses.insert(status.to_string(), json!({ "description": description }));
        let mut operation = json!({
            "operationId": self.id,
            "responses": responses,
        });

        if let Some(summary) = &self.summary {
            operation["summary"] = json!(summary);
        }
        if let Some(description) = &self.description {
            operation["description"] = json!(description);
        }
        if !self.tags.is_empty() {
            operation["tags"] = json!(self.tags);
        }
        if self.deprecated {
            operation["deprecated"] = Value::Bool(true);
        }

        let mut parameters: Vec<Value> = self
            .path_params()
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "in": "path",
                    "required": true,
                    "schema": { "type": "string" }
                })
            })
            .collect();
        parameters.extend(self.query_params.iter().map(|name| {
            json!({
                "name": name,
                "in": "query",
                "required": false,
                "schema": { "type": "string" }
            })
        }));
        if !parameters.is_empty() {
            operation["parameters"] = Value::Array(parameters);
        }

        if self.method.has_body() {
            operation["requestBody"] = json!({
                "required": true,
                "content": { "application/json": { "schema": { "type": "object" } } }
            });
        }

        if !self.entitlements.is_empty() {
            operation["x-entitlements"] = json!(self.entitlements);
        }

        operation
    }
}

/// Security scheme for OpenAPI specification.
#[derive(Debug, Clone)]
pub struct SecurityScheme {
    /// The name of the security scheme (used as key in `securitySchemes`).
    pub name: String,
    /// The underlying auth method.
    pub auth_method: ApiAuthMethod,
    /// Description of the security scheme.
    pub description: Option<String>,
}

impl SecurityScheme {
    /// Creates a new security scheme from an auth method.
    pub fn new(name: impl Into<String>, auth_method: ApiAuthMethod) -> Self {
        Self {
            name: name.into(),
            auth_method,
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn to_value(&self) -> Option<Value> {
        let scheme = match self.auth_method {
            ApiAuthMethod::BearerToken => "bearer",
            ApiAuthMethod::Basic { .. } => "basic",
            ApiAuthMethod::None => return None,
        };
        let mut obj = json!({ "type": "http", "scheme": scheme });
        if let Some(desc) = &self.description {
            obj["description"] = json!(desc);
        }
        Some(obj)
    }
}

/// Generator for OpenAPI 3.1.0 specifications.
///
/// ## Examples
///
/// ```rust
/// use rest_call::openapi::{EndpointSpec, OpenApiGenerator, OpenApiInfo, OutputFormat, Server};
/// use rest_call::RestMethod;
///
/// let doc = OpenApiGenerator::new(OpenApiInfo::new("Learn", "3900.0.0"))
///     .add_server(Server::new("https://lms.example.edu"))
///     .add_endpoint(
///         EndpointSpec::new("getTerms", RestMethod::Get, "/learn/api/public/v1/terms")
///             .with_query_params(["offset", "limit"]),
///     )
///     .generate(OutputFormat::Json)
///     .unwrap();
///
/// assert!(doc.contains("\"operationId\": \"getTerms\""));
/// ```
#[derive(Debug, Clone)]
pub struct OpenApiGenerator {
    info: OpenApiInfo,
    servers: Vec<Server>,
    endpoints: Vec<EndpointSpec>,
    security_schemes: Vec<SecurityScheme>,
    /// Global security requirements (applied to all operations).
    global_security: Vec<String>,
}

impl OpenApiGenerator {
    /// Creates a new OpenAPI generator with the given info.
    pub fn new(info: OpenApiInfo) -> Self {
        Self {
            info,
            servers: Vec::new(),
            endpoints: Vec::new(),
            security_schemes: Vec::new(),
            global_security: Vec::new(),
        }
    }

    /// Adds a server to the specification.
    pub fn add_server(mut self, server: Server) -> Self {
        self.servers.push(server);
        self
    }

    /// Adds an endpoint to the specification.
    pub fn add_endpoint(mut self, endpoint: EndpointSpec) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Adds multiple endpoints to the specification.
    pub fn add_endpoints(mut self, endpoints: impl IntoIterator<Item = EndpointSpec>) -> Self {
        self.endpoints.extend(endpoints);
        self
    }

    /// Adds a security scheme to the specification.
    pub fn add_security_scheme(mut self, scheme: SecurityScheme) -> Self {
        self.security_schemes.push(scheme);
        self
    }

    /// Sets global security requirements (by scheme name).
    pub fn with_global_security(
        mut self,
        scheme_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.global_security = scheme_names.into_iter().map(Into::into).collect();
        self
    }

    /// Generates the OpenAPI specification as a string.
    ///
    /// ## Errors
    ///
    /// Returns an error if serialization fails.
    pub fn generate(&self, format: OutputFormat) -> Result<String, GenerateError> {
        let spec = self.generate_value();

        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&spec).map_err(GenerateError::JsonSerialize)
            }
            OutputFormat::Yaml => serde_yaml::to_string(&spec).map_err(GenerateError::YamlSerialize),
        }
    }

    /// Generates the OpenAPI specification as a `serde_json::Value`.
    pub fn generate_value(&self) -> Value {
        let mut spec = json!({
            "openapi": "3.1.0",
            "info": self.info,
        });

        if !self.servers.is_empty() {
            spec["servers"] = json!(self.servers);
        }

        let paths = self.build_paths();
        if !paths.is_empty() {
            spec["paths"] = json!(paths);
        }

        let schemes: serde_json::Map<String, Value> = self
            .security_schemes
            .iter()
            .filter_map(|scheme| scheme.to_value().map(|v| (scheme.name.clone(), v)))
            .collect();
        if !schemes.is_empty() {
            spec["components"] = json!({ "securitySchemes": schemes });
        }

        if !self.global_security.is_empty() {
            let security: Vec<Value> = self
                .global_security
                .iter()
                .map(|name| json!({ name: [] }))
                .collect();
            spec["security"] = Value::Array(security);
        }

        spec
    }

    /// Groups operations by path, one entry per method.
    fn build_paths(&self) -> BTreeMap<String, serde_json::Map<String, Value>> {
        let mut paths: BTreeMap<String, serde_json::Map<String, Value>> = BTreeMap::new();

        for endpoint in &self.endpoints {
            paths
                .entry(endpoint.path.clone())
                .or_default()
                .insert(endpoint.method.openapi_key().to_string(), endpoint.operation());
        }

        paths
    }
}

/// Errors that can occur during OpenAPI generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// JSON serialization failed.
    #[error("failed to serialize OpenAPI spec to JSON: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    /// YAML serialization failed.
    #[error("failed to serialize OpenAPI spec to YAML: {0}")]
    YamlSerialize(#[source] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    const COURSES: &str = "/learn/api/public/v3/courses";
    const COURSE: &str = "/learn/api/public/v3/courses/{courseId}";

    #[test]
    fn test_basic_spec_generation() {
        let generator = OpenApiGenerator::new(OpenApiInfo::new("Learn", "1.0.0"))
            .add_server(Server::new("https://lms.example.edu"));

        let spec_json = generator.generate(OutputFormat::Json).unwrap();
        let spec: Value = serde_json::from_str(&spec_json).unwrap();

        assert_eq!(spec["openapi"], "3.1.0");
        assert_eq!(spec["info"]["title"], "Learn");
        assert_eq!(spec["info"]["version"], "1.0.0");
        assert_eq!(spec["servers"][0]["url"], "https://lms.example.edu");
        assert!(spec["paths"].is_null());
        assert!(spec["components"].is_null());
    }

    #[test]
    fn test_path_and_query_parameters() {
        let spec = OpenApiGenerator::new(OpenApiInfo::new("Learn", "1.0.0"))
            .add_endpoint(
                EndpointSpec::new("getCourse", RestMethod::Get, COURSE)
                    .with_summary("Loads a course")
                    .with_query_params(["fields", "expand"]),
            )
            .generate_value();

        let op = &spec["paths"][COURSE]["get"];
        assert_eq!(op["operationId"], "getCourse");
        assert_eq!(op["summary"], "Loads a course");
        assert!(op["responses"]["200"].is_object());
        assert!(op["requestBody"].is_null());

        let params = op["parameters"].as_array().unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params[0]["name"], "courseId");
        assert_eq!(params[0]["in"], "path");
        assert_eq!(params[0]["required"], true);
        assert_eq!(params[1]["name"], "fields");
        assert_eq!(params[1]["in"], "query");
        assert_eq!(params[2]["name"], "expand");
        assert_eq!(params[2]["required"], false);
    }

    #[test]
    fn test_methods_share_a_path() {
        let spec = OpenApiGenerator::new(OpenApiInfo::new("Learn", "1.0.0"))
            .add_endpoints([
                EndpointSpec::new("getCourses", RestMethod::Get, COURSES),
                EndpointSpec::new("createCourse", RestMethod::Post, COURSES),
                EndpointSpec::new("getCourse", RestMethod::Get, COURSE),
                EndpointSpec::new("updateCourse", RestMethod::Patch, COURSE),
                EndpointSpec::new("deleteCourse", RestMethod::Delete, COURSE),
            ])
            .generate_value();

        assert_eq!(spec["paths"][COURSES]["get"]["operationId"], "getCourses");
        assert_eq!(spec["paths"][COURSES]["post"]["operationId"], "createCourse");
        assert!(spec["paths"][COURSES]["post"]["responses"]["201"].is_object());
        assert!(spec["paths"][COURSES]["post"]["requestBody"].is_object());
        assert_eq!(spec["paths"][COURSE]["patch"]["operationId"], "updateCourse");
        assert!(spec["paths"][COURSE]["delete"]["responses"]["204"].is_object());
        assert_eq!(spec["paths"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_entitlements_extension() {
        let spec = OpenApiGenerator::new(OpenApiInfo::new("Learn", "1.0.0"))
            .add_endpoint(
                EndpointSpec::new("deleteCourse", RestMethod::Delete, COURSE)
                    .with_entitlements(["system.course.DELETE"]),
            )
            .generate_value();

        assert_eq!(
            spec["paths"][COURSE]["delete"]["x-entitlements"],
            json!(["system.course.DELETE"])
        );
    }

    #[test]
    fn test_security_schemes() {
        let spec = OpenApiGenerator::new(OpenApiInfo::new("Learn", "1.0.0"))
            .add_security_scheme(
                SecurityScheme::new("bearerAuth", ApiAuthMethod::BearerToken)
                    .with_description("OAuth2 access token"),
            )
            .add_security_scheme(SecurityScheme::new(
                "appCredentials",
                ApiAuthMethod::Basic {
                    username: "app-key".to_string(),
                },
            ))
            .add_security_scheme(SecurityScheme::new("none", ApiAuthMethod::None))
            .with_global_security(["bearerAuth"])
            .generate_value();

        let schemes = &spec["components"]["securitySchemes"];
        assert_eq!(schemes["bearerAuth"]["type"], "http");
        assert_eq!(schemes["bearerAuth"]["scheme"], "bearer");
        assert_eq!(schemes["bearerAuth"]["description"], "OAuth2 access token");
        assert_eq!(schemes["appCredentials"]["scheme"], "basic");
        assert!(schemes["none"].is_null());
        assert!(spec["security"][0]["bearerAuth"].is_array());
    }

    #[test]
    fn test_yaml_output() {
        let yaml = OpenApiGenerator::new(OpenApiInfo::new("Learn", "1.0.0"))
            .add_endpoint(EndpointSpec::new("getTerms", RestMethod::Get, "/learn/api/public/v1/terms"))
            .generate(OutputFormat::Yaml)
            .unwrap();

        assert!(yaml.contains("openapi: 3.1.0"));
        assert!(yaml.contains("title: Learn"));
        assert!(yaml.contains("operationId: getTerms"));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert!(parsed["paths"]["/learn/api/public/v1/terms"]["get"].is_mapping());
    }

    #[test]
    fn test_tags_and_deprecation() {
        let spec = OpenApiGenerator::new(OpenApiInfo::new("Learn", "1.0.0"))
            .add_endpoint(
                EndpointSpec::new("getCoursesV1", RestMethod::Get, "/learn/api/public/v1/courses")
                    .with_tags(["courses", "legacy"])
                    .deprecated(),
            )
            .generate_value();

        let op = &spec["paths"]["/learn/api/public/v1/courses"]["get"];
        assert_eq!(op["tags"], json!(["courses", "legacy"]));
        assert_eq!(op["deprecated"], true);
    }

    #[test]
    fn test_info_and_server_descriptions() {
        let spec = OpenApiGenerator::new(
            OpenApiInfo::new("Learn", "2.0.0").with_description("LMS REST API"),
        )
        .add_server(Server::new("https://lms.example.edu").with_description("production"))
        .generate_value();

        assert_eq!(spec["info"]["description"], "LMS REST API");
        assert_eq!(spec["servers"][0]["description"], "production");
        assert!(spec["info"]["termsOfService"].is_null());
    }

    #[test]
    fn test_malformed_template_has_no_path_params() {
        let spec = EndpointSpec::new("broken", RestMethod::Get, "/courses/{courseId");
        assert!(spec.path_params().is_empty());
    }
}
