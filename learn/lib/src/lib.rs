//! Typed calls for a Learn-style LMS REST API.
//!
//! Each resource lives in its own module of factory functions. A factory
//! binds ids, filters and a body to the endpoint and returns a
//! [`RestCall`](rest_call::RestCall); a [`LearnClient`] executes it.
//!
//! ## Available groups
//!
//! - [`oauth`] - client-credentials token exchange
//! - [`system`] - server version
//! - [`terms`] - academic terms
//! - [`courses`] - courses, organizations and cross-listed children
//! - [`users`] - user accounts
//! - [`memberships`] - course enrollments
//! - [`announcements`] - course announcements
//! - [`contents`] - course outline items
//! - [`gradebook`] - grade columns and grades
//!
//! ## Examples
//!
//! ```
//! use learn_lib::{courses, Id};
//!
//! let call = courses::get_course(Id::external("BIO 101/A")).unwrap();
//! assert_eq!(
//!     call.path(),
//!     "/learn/api/public/v3/courses/externalId:BIO%20101%2FA"
//! );
//!
//! let catalog = learn_lib::catalog().unwrap();
//! assert!(catalog.iter().any(|spec| spec.id == "getCourse"));
//! ```

use std::collections::HashSet;

use rest_call::openapi::EndpointSpec;
use rest_call::{ConfigError, EndpointId};

pub mod announcements;
pub mod client;
pub mod common;
pub mod config;
pub mod contents;
pub mod courses;
pub mod gradebook;
pub mod memberships;
pub mod oauth;
pub mod system;
pub mod terms;
pub mod users;

pub use client::LearnClient;
pub use common::{Id, Page, PageOptions};
pub use config::LearnConfig;

/// Every endpoint this crate covers, grouped by tag.
///
/// ## Errors
///
/// - [`ConfigError::InvalidEndpointId`] if an id is not a valid operation id
/// - [`ConfigError::DuplicateEndpoint`] if two endpoints share an id
pub fn catalog() -> Result<Vec<EndpointSpec>, ConfigError> {
    let specs: Vec<EndpointSpec> = [
        oauth::endpoints(),
        system::endpoints(),
        terms::endpoints(),
        courses::endpoints(),
        users::endpoints(),
        memberships::endpoints(),
        announcements::endpoints(),
        contents::endpoints(),
        gradebook::endpoints(),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut seen = HashSet::new();
    for spec in &specs {
        let id = EndpointId::new(spec.id.as_str())?;
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateEndpoint {
                id: spec.id.clone(),
            });
        }
    }

    Ok(specs)
}
