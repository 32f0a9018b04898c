//! OAuth2 client-credentials exchange.
//!
//! An application trades its key and secret (sent as HTTP basic auth) for a
//! bearer token:
//!
//! ```bash
//! curl -u {LEARN_APP_KEY}:{LEARN_APP_SECRET} \
//!   -d grant_type=client_credentials \
//!   https://lms.example.edu/learn/api/public/v1/oauth2/token
//! ```

mod types;

pub use types::*;

use rest_call::openapi::EndpointSpec;
use rest_call::response::JsonFormat;
use rest_call::{ApiError, Endpoint, RestCall, RestMethod};

use crate::common::endpoint;

pub const TOKEN_PATH: &str = "/learn/api/public/v1/oauth2/token";

fn request_token_endpoint() -> Endpoint<JsonFormat<TokenResponse>> {
    endpoint("requestToken", RestMethod::Post, TOKEN_PATH)
        .description("Requests an access token using the client credentials grant")
        .build()
}

/// Builds the token request.
///
/// The application key and secret are not part of the call; execute it with
/// a client configured for [`ApiAuthMethod::Basic`](rest_call::ApiAuthMethod::Basic).
///
/// ## Examples
///
/// ```rust
/// use learn_lib::oauth;
/// use rest_call::RequestBody;
///
/// let call = oauth::request_token().unwrap();
/// assert_eq!(call.path(), "/learn/api/public/v1/oauth2/token");
/// assert_eq!(
///     call.body(),
///     Some(&RequestBody::Form(vec![("grant_type".into(), "client_credentials".into())]))
/// );
/// ```
pub fn request_token() -> Result<RestCall<JsonFormat<TokenResponse>>, ApiError> {
    RestCall::builder(request_token_endpoint())
        .form_body(&TokenRequest::client_credentials())
        .build()
}

/// Endpoint descriptions for this group.
pub fn endpoints() -> Vec<EndpointSpec> {
    vec![request_token_endpoint().spec().with_tag("oauth")]
}
