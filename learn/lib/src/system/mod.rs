//! Server version information.

mod types;

pub use types::*;

use rest_call::openapi::EndpointSpec;
use rest_call::response::JsonFormat;
use rest_call::{ApiError, Endpoint, RestCall, RestMethod};

use crate::common::endpoint;

fn get_version_endpoint() -> Endpoint<JsonFormat<VersionInfo>> {
    endpoint("getVersion", RestMethod::Get, "/learn/api/public/v1/system/version")
        .description("Gets the version of the Learn server")
        .build()
}

/// `GET /learn/api/public/v1/system/version`. Needs no authentication.
pub fn get_version() -> Result<RestCall<JsonFormat<VersionInfo>>, ApiError> {
    RestCall::builder(get_version_endpoint()).build()
}

pub fn endpoints() -> Vec<EndpointSpec> {
    vec![get_version_endpoint().spec().with_tag("system")]
}
