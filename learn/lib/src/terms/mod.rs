//! Academic terms.
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | getTerms | GET | /learn/api/public/v1/terms |
//! | createTerm | POST | /learn/api/public/v1/terms |
//! | getTerm | GET | /learn/api/public/v1/terms/{termId} |
//! | updateTerm | PATCH | /learn/api/public/v1/terms/{termId} |
//! | deleteTerm | DELETE | /learn/api/public/v1/terms/{termId} |

mod types;

pub use types::*;

use rest_call::openapi::EndpointSpec;
use rest_call::response::{EmptyFormat, JsonFormat};
use rest_call::{ApiError, Endpoint, RestCall, RestMethod};

use crate::common::{Page, endpoint};

const TERMS: &str = "/learn/api/public/v1/terms";
const TERM: &str = "/learn/api/public/v1/terms/{termId}";

fn list_terms_endpoint() -> Endpoint<JsonFormat<Page<Term>>> {
    endpoint("getTerms", RestMethod::Get, TERMS)
        .description("Returns a list of terms")
        .query_options(&TermListOptions::NAMES)
        .build()
}

fn create_term_endpoint() -> Endpoint<JsonFormat<Term>> {
    endpoint("createTerm", RestMethod::Post, TERMS)
        .description("Creates a term")
        .entitlement("system.term.CREATE")
        .build()
}

fn get_term_endpoint() -> Endpoint<JsonFormat<Term>> {
    endpoint("getTerm", RestMethod::Get, TERM)
        .description("Loads a term")
        .build()
}

fn update_term_endpoint() -> Endpoint<JsonFormat<Term>> {
    endpoint("updateTerm", RestMethod::Patch, TERM)
        .description("Updates a term")
        .entitlement("system.term.EDIT")
        .build()
}

fn delete_term_endpoint() -> Endpoint<EmptyFormat> {
    endpoint("deleteTerm", RestMethod::Delete, TERM)
        .description("Deletes a term")
        .entitlement("system.term.DELETE")
        .build()
}

pub fn list_terms(options: &TermListOptions) -> Result<RestCall<JsonFormat<Page<Term>>>, ApiError> {
    RestCall::builder(list_terms_endpoint())
        .query_params(options)
        .build()
}

pub fn create_term(term: &TermInput) -> Result<RestCall<JsonFormat<Term>>, ApiError> {
    RestCall::builder(create_term_endpoint()).json_body(term).build()
}

pub fn get_term(term_id: impl AsRef<str>) -> Result<RestCall<JsonFormat<Term>>, ApiError> {
    RestCall::builder(get_term_endpoint())
        .path_param("termId", term_id.as_ref())
        .build()
}

/// Updates only the fields set on `term`.
pub fn update_term(
    term_id: impl AsRef<str>,
    term: &TermInput,
) -> Result<RestCall<JsonFormat<Term>>, ApiError> {
    RestCall::builder(update_term_endpoint())
        .path_param("termId", term_id.as_ref())
        .json_body(term)
        .build()
}

pub fn delete_term(term_id: impl AsRef<str>) -> Result<RestCall<EmptyFormat>, ApiError> {
    RestCall::builder(delete_term_endpoint())
        .path_param("termId", term_id.as_ref())
        .build()
}

pub fn endpoints() -> Vec<EndpointSpec> {
    [
        list_terms_endpoint().spec(),
        create_term_endpoint().spec(),
        get_term_endpoint().spec(),
        update_term_endpoint().spec(),
        delete_term_endpoint().spec(),
    ]
    .into_iter()
    .map(|spec| spec.with_tag("terms"))
    .collect()
}
