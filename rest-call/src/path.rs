//! URL path templates with `{name}` placeholders.
//!
//! A [`PathTemplate`] is parsed once and rendered per call. Rendering checks
//! that the supplied parameters match the placeholders exactly and
//! percent-encodes each value as a single path segment, so an identifier such
//! as `externalId:CS 101/A` can never change the shape of the URL.

use std::collections::HashSet;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::ConfigError;

/// Bytes escaped inside a path segment.
///
/// Everything outside RFC 3986 `pchar` is escaped, plus `%` so values are
/// never double-decoded. `:` and `@` stay literal; the LMS uses them in id
/// prefixes (`externalId:`, `userName:`).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed URL path template such as `/courses/{courseId}/users/{userId}`.
///
/// ## Examples
///
/// ```rust
/// use rest_call::PathTemplate;
///
/// let template = PathTemplate::parse("/courses/{courseId}/users/{userId}").unwrap();
/// assert_eq!(template.params(), vec!["courseId", "userId"]);
///
/// let path = template
///     .render(&[("courseId", "_12_1"), ("userId", "userName:jo smith")])
///     .unwrap();
/// assert_eq!(path, "/courses/_12_1/users/userName:jo%20smith");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parses a template.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidPathTemplate`] when the template does not
    /// start with `/`, has unbalanced or nested braces, or has an empty
    /// placeholder name.
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        if !template.starts_with('/') {
            return Err(ConfigError::invalid_path(format!(
                "template must start with '/': {template}"
            )));
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for next in chars.by_ref() {
                        match next {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => {
                                return Err(ConfigError::invalid_path(format!(
                                    "nested brace in {template}"
                                )))
                            }
                            other => name.push(other),
                        }
                    }
                    if !closed {
                        return Err(ConfigError::invalid_path(format!(
                            "unclosed brace in {template}"
                        )));
                    }
                    if name.trim().is_empty() {
                        return Err(ConfigError::invalid_path(format!(
                            "empty parameter name in {template}"
                        )));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Param(name));
                }
                '}' => {
                    return Err(ConfigError::invalid_path(format!(
                        "unmatched '}}' in {template}"
                    )))
                }
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            raw: template.to_string(),
            segments,
        })
    }

    /// Returns the template as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns placeholder names in order of first appearance.
    pub fn params(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) if seen.insert(name.as_str()) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns `true` when the template has no placeholders.
    pub fn is_static(&self) -> bool {
        !self
            .segments
            .iter()
            .any(|segment| matches!(segment, Segment::Param(_)))
    }

    /// Substitutes every placeholder with its percent-encoded value.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::UnknownPathParam`] if a name is not in the template
    /// - [`ConfigError::EmptyPathParam`] if a value is empty
    /// - [`ConfigError::DotSegmentPathParam`] if a value is `.` or `..`
    /// - [`ConfigError::MissingPathParam`] if a placeholder has no value
    pub fn render<K, V>(&self, params: &[(K, V)]) -> Result<String, ConfigError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let declared = self.params();
        for (name, value) in params {
            let name = name.as_ref();
            if !declared.contains(&name) {
                return Err(ConfigError::UnknownPathParam {
                    name: name.to_string(),
                });
            }
            if value.as_ref().is_empty() {
                return Err(ConfigError::EmptyPathParam {
                    name: name.to_string(),
                });
            }
            if is_dot_segment(value.as_ref()) {
                return Err(ConfigError::DotSegmentPathParam {
                    name: name.to_string(),
                });
            }
        }

        let mut path = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => {
                    // Last value wins when a name is supplied twice.
                    let value = params
                        .iter()
                        .rev()
                        .find(|(k, _)| k.as_ref() == name)
                        .map(|(_, v)| v.as_ref())
                        .ok_or_else(|| ConfigError::MissingPathParam { name: name.clone() })?;
                    path.extend(utf8_percent_encode(value, PATH_SEGMENT));
                }
            }
        }

        Ok(path)
    }
}

/// `Url::join` collapses these, so they would retarget the request.
fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Percent-encodes a value as a single path segment.
///
/// ## Examples
///
/// ```rust
/// use rest_call::path::encode_segment;
///
/// assert_eq!(encode_segment("externalId:a/b"), "externalId:a%2Fb");
/// ```
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str, params: &[(&str, &str)]) -> Result<String, ConfigError> {
        PathTemplate::parse(template)?.render(params)
    }

    #[test]
    fn test_static_template() {
        let template = PathTemplate::parse("/learn/api/public/v1/terms").unwrap();
        assert!(template.is_static());
        assert!(template.params().is_empty());
        let no_params: [(&str, &str); 0] = [];
        assert_eq!(template.render(&no_params).unwrap(), "/learn/api/public/v1/terms");
    }

    #[test]
    fn test_params_in_order() {
        let template =
            PathTemplate::parse("/v2/courses/{courseId}/gradebook/columns/{columnId}/users/{userId}")
                .unwrap();
        assert_eq!(template.params(), vec!["courseId", "columnId", "userId"]);
        assert!(!template.is_static());
    }

    #[test]
    fn test_render_substitutes_all() {
        let path = render(
            "/courses/{courseId}/users/{userId}",
            &[("userId", "_5_1"), ("courseId", "_12_1")],
        )
        .unwrap();
        assert_eq!(path, "/courses/_12_1/users/_5_1");
    }

    #[test]
    fn test_render_escapes_reserved_characters() {
        let path = render("/users/{userId}", &[("userId", "externalId:a/b?c#d%e")]).unwrap();
        assert_eq!(path, "/users/externalId:a%2Fb%3Fc%23d%25e");
    }

    #[test]
    fn test_render_escapes_space_and_unicode() {
        let path = render("/courses/{courseId}", &[("courseId", "courseId:Ünï 1")]).unwrap();
        assert_eq!(path, "/courses/courseId:%C3%9Cn%C3%AF%201");
    }

    #[test]
    fn test_render_keeps_id_prefix_characters() {
        let path = render("/users/{userId}", &[("userId", "userName:jo@example.edu")]).unwrap();
        assert_eq!(path, "/users/userName:jo@example.edu");
    }

    #[test]
    fn test_repeated_placeholder() {
        let path = render("/a/{id}/b/{id}", &[("id", "x")]).unwrap();
        assert_eq!(path, "/a/x/b/x");
        assert_eq!(PathTemplate::parse("/a/{id}/b/{id}").unwrap().params(), vec!["id"]);
    }

    #[test]
    fn test_placeholder_inside_segment() {
        let path = render("/files/{name}.json", &[("name", "report 1")]).unwrap();
        assert_eq!(path, "/files/report%201.json");
    }

    #[test]
    fn test_missing_param() {
        let err = render("/courses/{courseId}", &[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingPathParam { name } if name == "courseId"));
    }

    #[test]
    fn test_unknown_param() {
        let err = render("/courses/{courseId}", &[("courseId", "_1_1"), ("userId", "_2_1")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPathParam { name } if name == "userId"));
    }

    #[test]
    fn test_empty_param() {
        let err = render("/courses/{courseId}", &[("courseId", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPathParam { name } if name == "courseId"));
    }

    #[test]
    fn test_dot_segment_values_rejected() {
        for value in [".", ".."] {
            let err = render("/learn/api/public/v1/users/{userId}", &[("userId", value)])
                .unwrap_err();
            assert!(
                matches!(&err, ConfigError::DotSegmentPathParam { name } if name == "userId"),
                "{value:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_values_with_dots_kept_when_not_whole_segment() {
        assert_eq!(
            render("/users/{userId}", &[("userId", "...")]).unwrap(),
            "/users/..."
        );
        assert_eq!(
            render("/users/{userId}", &[("userId", "j.doe")]).unwrap(),
            "/users/j.doe"
        );
        assert_eq!(
            render("/files/{name}.json", &[("name", ".")]).unwrap(),
            "/files/..json"
        );
        assert_eq!(
            render("/users/{userId}", &[("userId", "%2e")]).unwrap(),
            "/users/%252e"
        );
    }

    #[test]
    fn test_invalid_templates() {
        for bad in ["courses/{id}", "/courses/{id", "/courses/{}", "/courses/id}", "/a/{b{c}}"] {
            assert!(
                matches!(
                    PathTemplate::parse(bad),
                    Err(ConfigError::InvalidPathTemplate { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips_raw() {
        let template = PathTemplate::parse("/users/{userId}/courses").unwrap();
        assert_eq!(template.to_string(), "/users/{userId}/courses");
        assert_eq!(template.as_str(), "/users/{userId}/courses");
    }
}
