//! Authentication and authorization errors.

use thiserror::Error;

/// Errors related to API authentication.
///
/// These errors occur during authentication setup or when the server
/// rejects credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A credential needed to authenticate is not configured.
    #[error("Missing credential: {name}")]
    MissingCredential {
        /// The credential (or environment variable) that is missing.
        name: String,
    },

    /// API key or token has an invalid format.
    #[error("Invalid API key format")]
    InvalidKeyFormat,

    /// Server rejected the authentication credentials.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message from the server.
        message: String,
    },

    /// Token has expired and needs to be re-issued.
    #[error("Token expired")]
    TokenExpired,

    /// The caller lacks the entitlements the operation requires.
    ///
    /// Entitlements are enforced by the server; the ones listed here are the
    /// ones documented on the endpoint, if any.
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The operation that was denied.
        operation: String,
        /// Entitlements documented for the operation.
        entitlements: Vec<String>,
    },
}

impl AuthError {
    /// Returns `true` if this error could potentially be resolved by
    /// obtaining fresh credentials.
    pub fn is_refreshable(&self) -> bool {
        matches!(self, Self::TokenExpired | Self::AuthenticationFailed { .. })
    }
}
