//! Request descriptors and execution for templated REST endpoints.
//!
//! The `rest-call` crate is the support layer every typed endpoint funnels
//! into. An endpoint is described once (method, URL template, documented
//! entitlements, response shape); each invocation turns that description into
//! a [`RestCall`] by substituting path parameters, attaching query options and
//! serializing a body. An [`ApiClient`] executes the call and decodes the
//! response into the endpoint's declared shape.
//!
//! ## Features
//!
//! - **Typed endpoints**: the response format is part of the endpoint's type
//! - **Safe URL templating**: path parameters are validated and percent-encoded
//! - **Query options from structs**: any `Serialize` options struct becomes query pairs
//! - **Async-first HTTP client**: built on `reqwest` with `tokio`
//! - **Layered error handling**: structured errors for different failure modes
//! - **OpenAPI generation**: publish a catalog of endpoints as OpenAPI 3.1
//!
//! ## Example
//!
//! ```rust
//! use rest_call::{Endpoint, RestCall, RestMethod};
//! use rest_call::response::JsonFormat;
//!
//! #[derive(serde::Deserialize)]
//! struct Course { id: String, name: String }
//!
//! let get_course: Endpoint<JsonFormat<Course>> = Endpoint::builder()
//!     .id("getCourse")
//!     .method(RestMethod::Get)
//!     .path("/learn/api/public/v3/courses/{courseId}")
//!     .description("Loads a specific course")
//!     .build();
//!
//! let call = RestCall::builder(get_course)
//!     .path_param("courseId", "externalId:CS 101")
//!     .query("fields", "id,name")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(call.path(), "/learn/api/public/v3/courses/externalId:CS%20101");
//! ```

pub mod auth;
pub mod call;
pub mod client;
pub mod endpoint;
pub mod endpoint_id;
pub mod error;
pub mod method;
pub mod openapi;
pub mod path;
pub mod query;
pub mod response;

// Re-exports for convenience
pub use auth::ApiAuthMethod;
pub use call::{RequestBody, RestCall, RestCallBuilder};
pub use client::{ApiClient, ApiClientBuilder};
pub use endpoint::{Endpoint, EndpointBuilder};
pub use endpoint_id::{EndpointId, EndpointIdError};
pub use error::{ApiError, AuthError, ClientError, ConfigError, ValidationError};
pub use method::RestMethod;
pub use path::PathTemplate;
pub use query::QueryPairs;
pub use response::ResponseFormat;
