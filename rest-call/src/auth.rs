//! Authentication methods applied by the [`ApiClient`](crate::ApiClient).

use strum::Display;

/// How the client authenticates each request.
///
/// The secret itself is handed to
/// [`ApiClientBuilder::auth`](crate::ApiClientBuilder::auth) separately so this
/// enum can be logged and compared freely.
///
/// ## Examples
///
/// ```rust
/// use rest_call::ApiAuthMethod;
///
/// let bearer = ApiAuthMethod::BearerToken;
/// assert_eq!(bearer.to_string(), "bearer");
///
/// let basic = ApiAuthMethod::Basic { username: "app-key".to_string() };
/// assert!(basic.requires_secret());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ApiAuthMethod {
    /// No authentication.
    #[default]
    None,
    /// `Authorization: Bearer <secret>`.
    #[strum(serialize = "bearer")]
    BearerToken,
    /// HTTP basic auth with the given username and the secret as password.
    ///
    /// Used for the OAuth2 client-credentials exchange, where the username
    /// is the application key and the secret is the application secret.
    Basic {
        /// The basic auth username.
        username: String,
    },
}

impl ApiAuthMethod {
    /// Returns `true` when requests need a secret to be attached.
    pub fn requires_secret(&self) -> bool {
        !matches!(self, Self::None)
    }
}
