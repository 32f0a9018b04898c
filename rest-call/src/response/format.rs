//! Response format trait and implementations.
//!
//! The [`ResponseFormat`] trait defines how to parse HTTP responses into
//! typed values. A list endpoint simply declares a JSON format over its list
//! envelope (for example `JsonFormat<Page<Course>>`).

use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Trait for response format parsing strategies.
///
/// Each format implements its own parsing logic, transforming an HTTP
/// response body into a typed output value.
///
/// ## Examples
///
/// ```rust
/// use rest_call::response::{JsonFormat, ResponseFormat};
///
/// #[derive(serde::Deserialize)]
/// struct User { id: String }
///
/// // The format type encodes both the parsing strategy and output type
/// type UserResponse = JsonFormat<User>;
/// assert_eq!(UserResponse::content_type(), "application/json");
/// ```
pub trait ResponseFormat: Send + Sync {
    /// The output type after parsing.
    type Output: Send + Sync;

    /// Parse a response body into the output type.
    fn parse(
        body: bytes::Bytes,
    ) -> impl Future<Output = Result<Self::Output, ValidationError>> + Send;

    /// Returns the expected Content-Type for this format.
    fn content_type() -> &'static str;
}

/// JSON response format with typed deserialization.
///
/// ## Type Parameters
///
/// - `T`: The type to deserialize the JSON into. Must implement [`DeserializeOwned`].
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for JsonFormat<T> {
    type Output = T;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationError::EmptyBody);
        }
        serde_json::from_slice(&body).map_err(ValidationError::JsonParse)
    }

    fn content_type() -> &'static str {
        "application/json"
    }
}

/// Plain text response format.
///
/// Returns the response body as a UTF-8 string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormat;

impl ResponseFormat for PlainTextFormat {
    type Output = String;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        String::from_utf8(body.to_vec()).map_err(|e| ValidationError::ContentTypeMismatch {
            expected: "valid UTF-8 text".to_string(),
            actual: format!("invalid UTF-8: {e}"),
        })
    }

    fn content_type() -> &'static str {
        "text/plain"
    }
}

/// Binary response format.
///
/// Returns the raw response bytes without interpretation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryFormat;

impl ResponseFormat for BinaryFormat {
    type Output = Vec<u8>;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        Ok(body.to_vec())
    }

    fn content_type() -> &'static str {
        "application/octet-stream"
    }
}

/// No-content response format.
///
/// Used by endpoints that answer `204 No Content` (deletes, some updates).
/// Whatever body the server sends is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyFormat;

impl ResponseFormat for EmptyFormat {
    type Output = ();

    async fn parse(_body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        Ok(())
    }

    fn content_type() -> &'static str {
        "*/*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[tokio::test]
    async fn test_json_format_parse() {
        let json = r#"{"name": "test", "value": 42}"#;
        let body = bytes::Bytes::from(json);

        let result = JsonFormat::<TestData>::parse(body).await.unwrap();
        assert_eq!(result.name, "test");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_json_format_list() {
        let body = bytes::Bytes::from(r#"[{"name": "a", "value": 1}, {"name": "b", "value": 2}]"#);

        let result = JsonFormat::<Vec<TestData>>::parse(body).await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].name, "b");
    }

    #[tokio::test]
    async fn test_json_format_invalid() {
        let body = bytes::Bytes::from("not json");
        let result = JsonFormat::<TestData>::parse(body).await;
        assert!(matches!(result, Err(ValidationError::JsonParse(_))));
    }

    #[tokio::test]
    async fn test_json_format_empty_body() {
        let result = JsonFormat::<TestData>::parse(bytes::Bytes::new()).await;
        assert!(matches!(result, Err(ValidationError::EmptyBody)));

        let result = JsonFormat::<TestData>::parse(bytes::Bytes::from("  \n")).await;
        assert!(matches!(result, Err(ValidationError::EmptyBody)));
    }

    #[tokio::test]
    async fn test_plain_text_format() {
        let body = bytes::Bytes::from("3900.12.0-rel.45+abc");

        let result = PlainTextFormat::parse(body).await.unwrap();
        assert_eq!(result, "3900.12.0-rel.45+abc");
    }

    #[tokio::test]
    async fn test_plain_text_invalid_utf8() {
        let body = bytes::Bytes::from(vec![0xFF, 0xFE]);
        let result = PlainTextFormat::parse(body).await;
        assert!(matches!(
            result,
            Err(ValidationError::ContentTypeMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_binary_format() {
        let data = vec![0x00, 0x01, 0x02, 0xFF];
        let body = bytes::Bytes::from(data.clone());

        let result = BinaryFormat::parse(body).await.unwrap();
        assert_eq!(result, data);
    }

    #[tokio::test]
    async fn test_empty_format_ignores_body() {
        EmptyFormat::parse(bytes::Bytes::new()).await.unwrap();
        EmptyFormat::parse(bytes::Bytes::from("{}")).await.unwrap();
    }

    #[test]
    fn test_content_types() {
        assert_eq!(JsonFormat::<()>::content_type(), "application/json");
        assert_eq!(PlainTextFormat::content_type(), "text/plain");
        assert_eq!(BinaryFormat::content_type(), "application/octet-stream");
        assert_eq!(EmptyFormat::content_type(), "*/*");
    }
}
