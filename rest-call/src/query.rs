//! Query options and form fields as ordered name/value pairs.
//!
//! Endpoint option structs derive `Serialize`; [`to_pairs`] flattens them so
//! that unset options disappear and renamed fields (`availability.duration`)
//! keep their wire names.

use serde::Serialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Ordered `(name, value)` pairs for a query string or form body.
pub type QueryPairs = Vec<(String, String)>;

/// Flattens a serializable options value into query pairs.
///
/// - `None` / `null` fields are skipped
/// - strings are used verbatim, numbers and booleans use their JSON text
/// - arrays of scalars are joined with `,`
/// - nested objects are rejected
///
/// ## Examples
///
/// ```rust
/// use rest_call::query::to_pairs;
///
/// #[derive(serde::Serialize)]
/// struct Options {
///     limit: Option<u32>,
///     #[serde(rename = "availability.available")]
///     available: Option<String>,
///     fields: Vec<&'static str>,
///     offset: Option<u32>,
/// }
///
/// let pairs = to_pairs(&Options {
///     limit: Some(50),
///     available: Some("Yes".into()),
///     fields: vec!["id", "name"],
///     offset: None,
/// })
/// .unwrap();
///
/// assert_eq!(pairs, vec![
///     ("limit".to_string(), "50".to_string()),
///     ("availability.available".to_string(), "Yes".to_string()),
///     ("fields".to_string(), "id,name".to_string()),
/// ]);
/// ```
///
/// ## Errors
///
/// Returns [`ConfigError::InvalidQuery`] when the value is not a struct or
/// map, or when a field holds a nested object.
pub fn to_pairs<T: Serialize + ?Sized>(options: &T) -> Result<QueryPairs, ConfigError> {
    let value = serde_json::to_value(options).map_err(|e| ConfigError::invalid_query(e.to_string()))?;

    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ConfigError::invalid_query(format!(
                "expected a struct or map, got {}",
                kind(&other)
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (name, value) in map {
        if let Some(text) = scalar_text(&name, &value)? {
            pairs.push((name, text));
        }
    }
    Ok(pairs)
}

/// Renders a single field, or `None` when the field should be omitted.
fn scalar_text(name: &str, value: &Value) -> Result<Option<String>, ConfigError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Array(items) => {
            if items.is_empty() {
                return Ok(None);
            }
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match scalar_text(name, item)? {
                    Some(text) if !matches!(item, Value::Array(_)) => parts.push(text),
                    Some(_) => {
                        return Err(ConfigError::invalid_query(format!(
                            "field '{name}' contains a nested array"
                        )))
                    }
                    None => {}
                }
            }
            Ok(Some(parts.join(",")))
        }
        Value::Object(_) => Err(ConfigError::invalid_query(format!(
            "field '{name}' is an object; only scalars and lists can be sent"
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct CourseOptions {
        #[serde(skip_serializing_if = "Option::is_none")]
        course_id: Option<String>,
        limit: Option<u32>,
        allow_guests: Option<bool>,
        #[serde(rename = "availability.available")]
        available: Option<&'static str>,
    }

    #[test]
    fn test_skips_unset_fields_and_keeps_order() {
        let pairs = to_pairs(&CourseOptions {
            course_id: Some("CS101".to_string()),
            limit: None,
            allow_guests: Some(false),
            available: Some("Yes"),
        })
        .unwrap();

        assert_eq!(
            pairs,
            vec![
                ("courseId".to_string(), "CS101".to_string()),
                ("allowGuests".to_string(), "false".to_string()),
                ("availability.available".to_string(), "Yes".to_string()),
            ]
        );
    }

    #[test]
    fn test_unit_and_none_produce_no_pairs() {
        assert!(to_pairs(&()).unwrap().is_empty());
        assert!(to_pairs(&None::<BTreeMap<String, String>>).unwrap().is_empty());
    }

    #[test]
    fn test_map_input() {
        let mut map = BTreeMap::new();
        map.insert("grant_type", "client_credentials");
        let pairs = to_pairs(&map).unwrap();
        assert_eq!(
            pairs,
            vec![("grant_type".to_string(), "client_credentials".to_string())]
        );
    }

    #[test]
    fn test_lists_are_comma_joined() {
        #[derive(Serialize)]
        struct Fields {
            fields: Vec<&'static str>,
            ids: Vec<u32>,
            empty: Vec<String>,
        }

        let pairs = to_pairs(&Fields {
            fields: vec!["id", "courseId", "name"],
            ids: vec![1, 2],
            empty: vec![],
        })
        .unwrap();
        assert_eq!(
            pairs,
            vec![
                ("fields".to_string(), "id,courseId,name".to_string()),
                ("ids".to_string(), "1,2".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_object_rejected() {
        #[derive(Serialize)]
        struct Nested {
            inner: BTreeMap<&'static str, &'static str>,
        }

        let mut inner = BTreeMap::new();
        inner.insert("a", "b");
        let err = to_pairs(&Nested { inner }).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQuery { .. }));
        assert!(err.to_string().contains("inner"));
    }

    #[test]
    fn test_nested_list_rejected() {
        #[derive(Serialize)]
        struct Nested {
            matrix: Vec<Vec<u8>>,
        }

        let err = to_pairs(&Nested {
            matrix: vec![vec![1]],
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidQuery { .. }));
    }

    #[test]
    fn test_scalar_input_rejected() {
        let err = to_pairs(&42).unwrap_err();
        assert!(err.to_string().contains("a number"));
    }
}
