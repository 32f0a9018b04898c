//! HTTP verbs.

use strum::{Display, EnumIter, EnumString};

/// The verb an endpoint is called with.
///
/// `Display` and `FromStr` use the uppercase wire spelling.
///
/// ## Examples
///
/// ```rust
/// use rest_call::RestMethod;
///
/// let method: RestMethod = "PATCH".parse().unwrap();
/// assert_eq!(method, RestMethod::Patch);
/// assert!(method.has_body());
/// assert!(!method.is_idempotent());
/// assert_eq!(method.success_status(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    Get,
    /// Creates a child resource; the LMS answers `201 Created`.
    Post,
    /// Creates or replaces the resource at the addressed URL (memberships).
    Put,
    /// Partial update; only the fields sent are changed.
    Patch,
    /// Answers `204 No Content`.
    Delete,
    Head,
    Options,
    Trace,
}

impl RestMethod {
    /// Whether a call with this verb may carry a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Whether repeating the call leaves the server in the same state.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post | Self::Patch)
    }

    /// Whether the call only reads.
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Options | Self::Trace)
    }

    /// Status code of a successful answer.
    pub fn success_status(self) -> u16 {
        match self {
            Self::Post => 201,
            Self::Delete => 204,
            _ => 200,
        }
    }

    /// Key of this verb inside an OpenAPI path item.
    pub fn openapi_key(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Head => "head",
            Self::Options => "options",
            Self::Trace => "trace",
        }
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
            Self::Trace => reqwest::Method::TRACE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
