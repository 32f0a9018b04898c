//! A connected client for the LMS.

use rest_call::openapi::{OpenApiGenerator, OpenApiInfo, SecurityScheme, Server};
use rest_call::response::JsonFormat;
use rest_call::{ApiAuthMethod, ApiClient, ApiError, AuthError, ConfigError, ResponseFormat, RestCall};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::common::Page;
use crate::config::{APP_KEY_VAR, APP_SECRET_VAR, LearnConfig};
use crate::oauth;

/// Executes calls against one LMS with one set of credentials.
///
/// ## Examples
///
/// ```rust,no_run
/// use learn_lib::{courses, LearnClient, LearnConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LearnClient::connect(&LearnConfig::from_env()?).await?;
/// let course = client.execute(&courses::get_course("_7_1")?).await?;
/// println!("{}", course.name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LearnClient {
    api: ApiClient,
}

impl LearnClient {
    /// Wraps an already authenticated client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Builds a client from `config` and authenticates it.
    ///
    /// A configured access token is used as-is. Otherwise the application
    /// key and secret are exchanged once for a bearer token; the token is not
    /// refreshed when it expires.
    ///
    /// ## Errors
    ///
    /// - [`AuthError::MissingCredential`] when neither a token nor both
    ///   application credentials are configured
    /// - any error of the token exchange
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub async fn connect(config: &LearnConfig) -> Result<Self, ApiError> {
        let base = ApiClient::builder(config.base_url.clone())
            .timeout(config.timeout)
            .build()?;

        if let Some(token) = &config.access_token {
            debug!("using configured access token");
            return Ok(Self::new(base.with_auth(ApiAuthMethod::BearerToken, token)));
        }

        let key = config
            .app_key
            .as_ref()
            .ok_or_else(|| missing(APP_KEY_VAR))?;
        let secret = config
            .app_secret
            .as_ref()
            .ok_or_else(|| missing(APP_SECRET_VAR))?;

        let exchange = base.with_auth(
            ApiAuthMethod::Basic {
                username: key.clone(),
            },
            secret,
        );
        let token = exchange.execute(&oauth::request_token()?).await?;
        info!(
            expires_in = token.expires_in,
            user_id = token.user_id.as_deref(),
            "obtained access token"
        );

        Ok(Self::new(base.with_auth(
            ApiAuthMethod::BearerToken,
            token.access_token,
        )))
    }

    /// The underlying HTTP client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Executes a single call.
    ///
    /// ## Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn execute<F: ResponseFormat>(&self, call: &RestCall<F>) -> Result<F::Output, ApiError> {
        self.api.execute(call).await
    }

    /// Executes a list call and follows `paging.nextPage` links, returning the
    /// results of every page.
    ///
    /// At most `max_pages` pages are fetched (at least one); when more remain a
    /// warning is logged and the results gathered so far are returned.
    ///
    /// ## Errors
    ///
    /// Returns the first failing page's error, or
    /// [`ConfigError::InvalidPathTemplate`] for a malformed next-page link.
    #[instrument(skip(self, call), fields(endpoint = call.id()))]
    pub async fn collect_all<T>(
        &self,
        call: RestCall<JsonFormat<Page<T>>>,
        max_pages: usize,
    ) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let max_pages = max_pages.max(1);
        let mut results = Vec::new();
        let mut next = call;
        let mut pages = 0;

        loop {
            let page = self.api.execute(&next).await?;
            pages += 1;
            results.extend(page.results);

            let Some(link) = page.paging.and_then(|p| p.next_page).filter(|l| !l.is_empty()) else {
                break;
            };
            if pages >= max_pages {
                warn!(pages, %link, "stopped paging before the last page");
                break;
            }
            debug!(%link, "following next page");
            next = next.follow(&link)?;
        }

        debug!(pages, count = results.len(), "collected results");
        Ok(results)
    }

    /// An OpenAPI generator describing every endpoint in the
    /// [catalog](crate::catalog), served from this client's base URL.
    ///
    /// ## Errors
    ///
    /// Returns an error if the catalog is invalid.
    pub fn openapi(&self) -> Result<OpenApiGenerator, ConfigError> {
        openapi_for(self.api.base_url().as_str())
    }
}

/// An OpenAPI generator for the catalog, served from `server`.
///
/// ## Errors
///
/// Returns an error if the catalog is invalid.
pub fn openapi_for(server: &str) -> Result<OpenApiGenerator, ConfigError> {
    let info = OpenApiInfo::new("Learn REST API", env!("CARGO_PKG_VERSION"))
        .with_description("Endpoints covered by learn-lib");

    Ok(OpenApiGenerator::new(info)
        .add_server(Server::new(server))
        .add_security_scheme(
            SecurityScheme::new("bearerAuth", ApiAuthMethod::BearerToken)
                .with_description("Access token from the client-credentials exchange"),
        )
        .add_security_scheme(
            SecurityScheme::new(
                "appCredentials",
                ApiAuthMethod::Basic {
                    username: String::new(),
                },
            )
            .with_description("Application key and secret; token endpoint only"),
        )
        .with_global_security(["bearerAuth"])
        .add_endpoints(crate::catalog()?))
}

fn missing(name: &str) -> AuthError {
    AuthError::MissingCredential {
        name: name.to_string(),
    }
}
