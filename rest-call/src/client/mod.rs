//! HTTP client module.
//!
//! [`ApiClient`] executes [`RestCall`](crate::RestCall)s: it resolves the URL
//! against a base, applies authentication, sends the body, maps non-success
//! statuses to errors and decodes the response in the call's format. Every
//! request runs inside an `api_request` tracing span.
//!
//! ## Examples
//!
//! ```rust
//! use rest_call::{ApiAuthMethod, ApiClient};
//! use url::Url;
//!
//! let client = ApiClient::builder(Url::parse("https://lms.example.edu").unwrap())
//!     .auth(ApiAuthMethod::BearerToken, "token")
//!     .build()
//!     .unwrap();
//! assert_eq!(client.auth_method(), Some(&ApiAuthMethod::BearerToken));
//! ```

mod executor;

pub use executor::{ApiClient, ApiClientBuilder};
