//! Endpoint, request-building and client configuration errors.

use thiserror::Error;

use crate::endpoint_id::EndpointIdError;
use crate::method::RestMethod;

/// Errors in API, endpoint or request configuration.
///
/// These errors occur while building a request descriptor or configuring a
/// client, before anything is sent over the wire. They usually indicate a
/// programmer error or invalid caller input.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required configuration field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A configuration value could not be interpreted.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// The configuration field.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// Endpoint ID validation failed.
    #[error("Invalid endpoint ID: {0}")]
    InvalidEndpointId(#[from] EndpointIdError),

    /// Path template contains invalid parameter syntax.
    #[error("Invalid path template: {message}")]
    InvalidPathTemplate {
        /// Description of the path template error.
        message: String,
    },

    /// A placeholder in the path template received no value.
    #[error("Missing path parameter: {name}")]
    MissingPathParam {
        /// The placeholder name.
        name: String,
    },

    /// A value was supplied for a placeholder the template does not have.
    #[error("Unknown path parameter: {name}")]
    UnknownPathParam {
        /// The supplied parameter name.
        name: String,
    },

    /// A path parameter value was empty.
    #[error("Empty value for path parameter: {name}")]
    EmptyPathParam {
        /// The placeholder name.
        name: String,
    },

    /// A path parameter value would be read as a `.` or `..` segment.
    #[error("Path parameter '{name}' cannot be a dot segment")]
    DotSegmentPathParam {
        /// The placeholder name.
        name: String,
    },

    /// Query options could not be flattened into name/value pairs.
    #[error("Invalid query options: {message}")]
    InvalidQuery {
        /// Description of the problem.
        message: String,
    },

    /// The request body could not be serialized.
    #[error("Request body serialization failed: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// A body was attached to a method that does not carry one.
    #[error("{method} requests cannot carry a body")]
    UnexpectedBody {
        /// The endpoint's method.
        method: RestMethod,
    },

    /// A header name or value was rejected.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header problem.
        message: String,
    },

    /// Duplicate endpoint ID detected.
    #[error("Duplicate endpoint ID: {id}")]
    DuplicateEndpoint {
        /// The duplicate endpoint ID.
        id: String,
    },
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }

    /// Creates an invalid path template error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPathTemplate {
            message: message.into(),
        }
    }

    /// Creates an invalid query error.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        let err = ConfigError::missing_field("base_url");
        assert_eq!(err.to_string(), "Missing required field: base_url");
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_invalid_path_template() {
        let err = ConfigError::invalid_path("unclosed brace in /users/{id");
        assert!(err.to_string().contains("Invalid path template"));
    }

    #[test]
    fn test_path_param_errors() {
        let missing = ConfigError::MissingPathParam {
            name: "courseId".to_string(),
        };
        assert_eq!(missing.to_string(), "Missing path parameter: courseId");

        let unknown = ConfigError::UnknownPathParam {
            name: "userId".to_string(),
        };
        assert_eq!(unknown.to_string(), "Unknown path parameter: userId");
    }

    #[test]
    fn test_unexpected_body() {
        let err = ConfigError::UnexpectedBody {
            method: RestMethod::Delete,
        };
        assert_eq!(err.to_string(), "DELETE requests cannot carry a body");
    }

    #[test]
    fn test_duplicate_endpoint() {
        let err = ConfigError::DuplicateEndpoint {
            id: "getCourses".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate endpoint ID: getCourses");
    }
}
