//! Connection settings read from the environment.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `LEARN_BASE_URL` | Server root, e.g. `https://lms.example.edu` (required) |
//! | `LEARN_APP_KEY` | Application key for the client-credentials exchange |
//! | `LEARN_APP_SECRET` | Application secret for the client-credentials exchange |
//! | `LEARN_ACCESS_TOKEN` | Ready-made bearer token; skips the exchange |
//! | `LEARN_TIMEOUT_SECS` | Request timeout in seconds (default 30) |

use std::fmt;
use std::time::Duration;

use rest_call::ConfigError;
use tracing::debug;
use url::Url;

pub const BASE_URL_VAR: &str = "LEARN_BASE_URL";
pub const APP_KEY_VAR: &str = "LEARN_APP_KEY";
pub const APP_SECRET_VAR: &str = "LEARN_APP_SECRET";
pub const ACCESS_TOKEN_VAR: &str = "LEARN_ACCESS_TOKEN";
pub const TIMEOUT_VAR: &str = "LEARN_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the LMS.
///
/// `Debug` output never includes the secret or the token.
#[derive(Clone, PartialEq, Eq)]
pub struct LearnConfig {
    pub base_url: Url,
    pub app_key: Option<String>,
    pub app_secret: Option<String>,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl LearnConfig {
    /// A configuration with no credentials and the default timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            app_key: None,
            app_secret: None,
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// ## Errors
    ///
    /// See [`from_lookup`](Self::from_lookup).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// Blank values count as unset.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use learn_lib::LearnConfig;
    ///
    /// let config = LearnConfig::from_lookup(|name| match name {
    ///     "LEARN_BASE_URL" => Some("https://lms.example.edu".to_string()),
    ///     "LEARN_ACCESS_TOKEN" => Some("token".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.base_url.as_str(), "https://lms.example.edu/");
    /// assert!(config.access_token.is_some());
    /// ```
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::MissingField`] when `LEARN_BASE_URL` is unset
    /// - [`ConfigError::InvalidUrl`] when it does not parse
    /// - [`ConfigError::InvalidValue`] for a non-numeric or zero timeout
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let base_url = read(BASE_URL_VAR).ok_or_else(|| ConfigError::missing_field(BASE_URL_VAR))?;
        let base_url = Url::parse(&base_url)?;

        let timeout = match read(TIMEOUT_VAR) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT,
        };

        let config = Self {
            base_url,
            app_key: read(APP_KEY_VAR),
            app_secret: read(APP_SECRET_VAR),
            access_token: read(ACCESS_TOKEN_VAR),
            timeout,
        };
        debug!(?config, "loaded configuration");
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Uses a ready-made bearer token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Uses the client-credentials exchange with these application credentials.
    pub fn with_app_credentials(mut self, key: impl Into<String>, secret: impl Into<String>) -> Self {
        self.app_key = Some(key.into());
        self.app_secret = Some(secret.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for LearnConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("LearnConfig")
            .field("base_url", &self.base_url.as_str())
            .field("app_key", &self.app_key)
            .field("app_secret", &redact(&self.app_secret))
            .field("access_token", &redact(&self.access_token))
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw
        .parse()
        .map_err(|e| ConfigError::invalid_value(TIMEOUT_VAR, format!("'{raw}': {e}")))?;
    if secs == 0 {
        return Err(ConfigError::invalid_value(TIMEOUT_VAR, "must be at least 1 second"));
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_full_config() {
        let config = LearnConfig::from_lookup(lookup(&[
            ("LEARN_BASE_URL", "https://lms.example.edu"),
            ("LEARN_APP_KEY", "key"),
            ("LEARN_APP_SECRET", "secret"),
            ("LEARN_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://lms.example.edu/");
        assert_eq!(config.app_key.as_deref(), Some("key"));
        assert_eq!(config.app_secret.as_deref(), Some("secret"));
        assert_eq!(config.access_token, None);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_defaults_and_blank_values() {
        let config = LearnConfig::from_lookup(lookup(&[
            ("LEARN_BASE_URL", " https://lms.example.edu "),
            ("LEARN_ACCESS_TOKEN", "   "),
        ]))
        .unwrap();

        assert_eq!(config.access_token, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_base_url() {
        let err = LearnConfig::from_lookup(lookup(&[("LEARN_APP_KEY", "key")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: "LEARN_BASE_URL"
            }
        ));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = LearnConfig::from_lookup(lookup(&[("LEARN_BASE_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_invalid_timeout() {
        for bad in ["soon", "0", "-3"] {
            let err = LearnConfig::from_lookup(|name: &str| match name {
                "LEARN_BASE_URL" => Some("https://lms.example.edu".to_string()),
                "LEARN_TIMEOUT_SECS" => Some(bad.to_string()),
                _ => None,
            })
            .unwrap_err();
            assert!(
                matches!(
                    err,
                    ConfigError::InvalidValue {
                        field: "LEARN_TIMEOUT_SECS",
                        ..
                    }
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = LearnConfig::new(Url::parse("https://lms.example.edu").unwrap())
            .with_app_credentials("key", "super-secret")
            .with_access_token("tok-123");

        let printed = format!("{config:?}");
        assert!(printed.contains("key"));
        assert!(!printed.contains("super-secret"));
        assert!(!printed.contains("tok-123"));
        assert!(printed.contains("<redacted>"));
    }
}
