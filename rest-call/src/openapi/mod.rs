//! OpenAPI document generation.
//!
//! Endpoint catalogs are published as OpenAPI 3.1.0 so that other tooling can
//! see which operations this client covers.
//!
//! ## Examples
//!
//! ```rust
//! use rest_call::openapi::{EndpointSpec, OpenApiGenerator, OpenApiInfo, OutputFormat, Server};
//! use rest_call::RestMethod;
//!
//! let yaml = OpenApiGenerator::new(OpenApiInfo::new("Learn", "1.0.0"))
//!     .add_server(Server::new("https://lms.example.edu"))
//!     .add_endpoint(
//!         EndpointSpec::new("getUser", RestMethod::Get, "/learn/api/public/v1/users/{userId}")
//!             .with_summary("Loads a user")
//!             .with_entitlements(["user.VIEW"]),
//!     )
//!     .generate(OutputFormat::Yaml)
//!     .unwrap();
//!
//! assert!(yaml.contains("x-entitlements"));
//! ```

pub mod generator;

pub use generator::{
    EndpointSpec, GenerateError, OpenApiGenerator, OpenApiInfo, OutputFormat, SecurityScheme,
    Server,
};
