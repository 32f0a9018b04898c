use serde::{Deserialize, Serialize};

/// Form fields of the token request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRequest {
    pub grant_type: String,
}

impl TokenRequest {
    pub fn client_credentials() -> Self {
        Self {
            grant_type: "client_credentials".to_string(),
        }
    }
}

/// A granted access token.
///
/// Unlike the rest of the API this payload uses snake_case keys.
///
/// ```json
/// { "access_token": "u7Jc...", "token_type": "bearer", "expires_in": 3599 }
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,

    pub token_type: String,

    /// Lifetime in seconds.
    pub expires_in: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Present for three-legged tokens only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}
