//! Request execution with tracing instrumentation.
//!
//! This module provides the [`ApiClient`] struct for executing [`RestCall`]s
//! with automatic auth handling and tracing.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use tracing::{debug, instrument, warn, Span};
use url::Url;

use crate::auth::ApiAuthMethod;
use crate::call::{RequestBody, RestCall};
use crate::error::{ApiError, AuthError, ClientError, ConfigError};
use crate::response::ResponseFormat;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Error body the LMS returns with non-success statuses.
///
/// ```json
/// { "status": 404, "code": "bb-rest-course-not-found", "message": "Course not found" }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    extra_info: Option<String>,
}

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    user_agent: String,
    auth: Option<(ApiAuthMethod, String)>,
}

impl ApiClientBuilder {
    /// Creates a new builder with the specified base URL.
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            auth: None,
        }
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use rest_call::ApiClient;
    ///
    /// let base_url = url::Url::parse("https://lms.example.edu").unwrap();
    /// let client = ApiClient::builder(base_url)
    ///     .timeout(Duration::from_secs(60))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.timeout(), Duration::from_secs(60));
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let (name, value) = header_pair(name.as_ref(), value.as_ref())?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the authentication method and its secret.
    ///
    /// For [`ApiAuthMethod::BearerToken`] the secret is the access token; for
    /// [`ApiAuthMethod::Basic`] it is the password.
    pub fn auth(mut self, method: ApiAuthMethod, secret: impl Into<String>) -> Self {
        self.auth = Some((method, secret.into()));
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .user_agent(self.user_agent)
            .build()
            .map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
            auth: self.auth,
        })
    }
}

/// Async HTTP client for executing [`RestCall`]s.
///
/// ## Examples
///
/// ```rust,no_run
/// use rest_call::{ApiAuthMethod, ApiClient, Endpoint, RestCall, RestMethod};
/// use rest_call::response::JsonFormat;
/// use url::Url;
///
/// #[derive(serde::Deserialize)]
/// struct Term { id: String, name: String }
///
/// # async fn run() -> Result<(), rest_call::ApiError> {
/// let client = ApiClient::builder(Url::parse("https://lms.example.edu").unwrap())
///     .auth(ApiAuthMethod::BearerToken, "token")
///     .build()?;
///
/// let endpoint: Endpoint<JsonFormat<Term>> = Endpoint::builder()
///     .id("getTerm")
///     .method(RestMethod::Get)
///     .path("/learn/api/public/v1/terms/{termId}")
///     .build();
///
/// let call = RestCall::builder(endpoint).path_param("termId", "_4_1").build()?;
/// let term = client.execute(&call).await?;
/// println!("{}", term.name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    auth: Option<(ApiAuthMethod, String)>,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a new API client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the configured auth method, if any.
    pub fn auth_method(&self) -> Option<&ApiAuthMethod> {
        self.auth.as_ref().map(|(method, _)| method)
    }

    /// Returns a copy of this client that authenticates with `method`.
    ///
    /// The underlying connection pool is shared.
    pub fn with_auth(&self, method: ApiAuthMethod, secret: impl Into<String>) -> Self {
        Self {
            auth: Some((method, secret.into())),
            ..self.clone()
        }
    }

    /// Executes a call and decodes the response.
    ///
    /// ## Errors
    ///
    /// - [`ClientError::Timeout`] when the server does not answer in time
    /// - [`ClientError::Request`] for other network failures
    /// - [`AuthError::AuthenticationFailed`] for 401
    /// - [`AuthError::InsufficientPermissions`] for 403
    /// - [`ClientError::HttpStatus`] for every other non-2xx status
    /// - [`ApiError::Validation`] when the body does not match the declared shape
    #[instrument(
        name = "api_request",
        skip(self, call),
        fields(
            endpoint = call.id(),
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute<F>(&self, call: &RestCall<F>) -> Result<F::Output, ApiError>
    where
        F: ResponseFormat,
    {
        Span::current().record("http.method", call.method().to_string().as_str());
        let url = call.url(&self.base_url)?;
        Span::current().record("http.url", url.as_str());

        let mut request = self
            .client
            .request(call.method().to_reqwest(), url)
            .header(ACCEPT, F::content_type());

        for (name, value) in call.headers() {
            let (name, value) = header_pair(name, value)?;
            request = request.header(name, value);
        }

        request = self.apply_auth(request);

        request = match call.body() {
            Some(RequestBody::Json(value)) => request.json(value),
            Some(RequestBody::Form(pairs)) => request.form(pairs),
            None => request,
        };

        debug!("sending request");
        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            let text = response.text().await.unwrap_or_default();
            let envelope: ErrorEnvelope = serde_json::from_str(&text).unwrap_or_default();
            let message = match (envelope.message, text.trim()) {
                (Some(message), _) => message,
                (None, "") => status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
                (None, raw) => raw.to_string(),
            };
            warn!(
                status = status_code,
                code = envelope.code.as_deref(),
                extra_info = envelope.extra_info.as_deref(),
                %message,
                "request failed"
            );

            return Err(match status_code {
                401 => AuthError::AuthenticationFailed { message }.into(),
                403 => AuthError::InsufficientPermissions {
                    operation: call.id().to_string(),
                    entitlements: call.entitlements().to_vec(),
                }
                .into(),
                _ => ClientError::HttpStatus {
                    status: status_code,
                    code: envelope.code,
                    message,
                }
                .into(),
            });
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        debug!(bytes = body.len(), "response received");
        let parsed = F::parse(body).await.map_err(ApiError::Validation)?;

        Ok(parsed)
    }

    /// Applies authentication to a request builder based on the configured auth method.
    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let Some((method, secret)) = &self.auth else {
            return request;
        };

        match method {
            ApiAuthMethod::BearerToken => request.header(AUTHORIZATION, format!("Bearer {secret}")),
            ApiAuthMethod::Basic { username } => request.basic_auth(username, Some(secret)),
            ApiAuthMethod::None => request,
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ClientError::Timeout {
                duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
            .into()
        } else {
            ClientError::Request(err).into()
        }
    }
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ConfigError> {
    let header_name = HeaderName::try_from(name).map_err(|e| ConfigError::InvalidHeader {
        message: format!("invalid header name '{name}': {e}"),
    })?;
    let header_value = HeaderValue::try_from(value).map_err(|e| ConfigError::InvalidHeader {
        message: format!("invalid value for header '{name}': {e}"),
    })?;
    Ok((header_name, header_value))
}
