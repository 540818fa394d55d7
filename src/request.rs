use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::types::GrantType;

/// A cookie presented with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub name: String,
    pub value: String,
}

impl Credential {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An inbound request, reduced to the cookies it carries (in header order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveRequest {
    cookies: Vec<Credential>,
}

impl LiveRequest {
    #[must_use]
    pub fn new(cookies: Vec<Credential>) -> Self {
        Self { cookies }
    }

    #[must_use]
    pub fn cookies(&self) -> &[Credential] {
        &self.cookies
    }

    /// First cookie named `name`.
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<&Credential> {
        self.cookies.iter().find(|c| c.name == name)
    }
}

impl FromIterator<Credential> for LiveRequest {
    fn from_iter<I: IntoIterator<Item = Credential>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Jar iteration order is unspecified; use
/// [`LiveRequest::from_headers`] when cookie order matters.
impl From<&CookieJar> for LiveRequest {
    fn from(jar: &CookieJar) -> Self {
        jar.iter()
            .map(|c| Credential::new(c.name(), c.value()))
            .collect()
    }
}

/// One header of a recorded request, with all its values in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequestHeader {
    pub name: String,
    pub values: Vec<String>,
}

impl HttpRequestHeader {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// A request as recorded when its token was issued.
///
/// The original connection is gone by the time a refresh token comes back,
/// so only its headers remain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRequest {
    headers: Vec<HttpRequestHeader>,
}

impl StoredRequest {
    #[must_use]
    pub fn new(headers: Vec<HttpRequestHeader>) -> Self {
        Self { headers }
    }

    #[must_use]
    pub fn headers(&self) -> &[HttpRequestHeader] {
        &self.headers
    }
}

impl FromIterator<HttpRequestHeader> for StoredRequest {
    fn from_iter<I: IntoIterator<Item = HttpRequestHeader>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Request handed to the live validation path, tagged at the integration boundary.
#[derive(Debug, Clone, Copy)]
pub enum RequestView<'a> {
    Live(&'a LiveRequest),
    Stored(&'a StoredRequest),
    /// Any other request shape; the label names it in diagnostics.
    Other(&'a str),
}

impl<'a> RequestView<'a> {
    /// Label used in logs and in [`Error::UnsupportedRequestType`](crate::Error::UnsupportedRequestType).
    #[must_use]
    pub fn kind(&self) -> &'a str {
        match *self {
            Self::Live(_) => "LiveRequest",
            Self::Stored(_) => "StoredRequest",
            Self::Other(label) => label,
        }
    }
}

impl<'a> From<&'a LiveRequest> for RequestView<'a> {
    fn from(request: &'a LiveRequest) -> Self {
        Self::Live(request)
    }
}

impl<'a> From<&'a StoredRequest> for RequestView<'a> {
    fn from(request: &'a StoredRequest) -> Self {
        Self::Stored(request)
    }
}

/// Grant being processed by the token endpoint, with the request recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantContext {
    pub grant_type: GrantType,
    pub request: StoredRequest,
}

impl GrantContext {
    #[must_use]
    pub fn new(grant_type: GrantType, request: StoredRequest) -> Self {
        Self {
            grant_type,
            request,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::cookie::Cookie;

    use super::*;

    #[test]
    fn cookie_lookup_returns_first_match() {
        let request: LiveRequest = [
            Credential::new("foo", "1"),
            Credential::new("commonAuthId", "first"),
            Credential::new("commonAuthId", "second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(request.cookie("commonAuthId").unwrap().value, "first");
        assert!(request.cookie("missing").is_none());
        assert_eq!(request.cookies().len(), 3);
    }

    #[test]
    fn cookie_lookup_is_case_sensitive() {
        let request = LiveRequest::new(vec![Credential::new("commonauthid", "x")]);
        assert!(request.cookie("commonAuthId").is_none());
    }

    #[test]
    fn live_request_from_cookie_jar() {
        let jar = CookieJar::new().add(Cookie::new("commonAuthId", "abc"));
        let request = LiveRequest::from(&jar);
        assert_eq!(request.cookie("commonAuthId").unwrap().value, "abc");
    }

    #[test]
    fn request_view_kind_labels() {
        let live = LiveRequest::default();
        let stored = StoredRequest::default();
        assert_eq!(RequestView::from(&live).kind(), "LiveRequest");
        assert_eq!(RequestView::from(&stored).kind(), "StoredRequest");
        assert_eq!(RequestView::Other("grpc::Request").kind(), "grpc::Request");
    }

    #[test]
    fn grant_context_serde_roundtrip() {
        let context = GrantContext::new(
            GrantType::RefreshToken,
            StoredRequest::new(vec![HttpRequestHeader::new(
                "Cookie",
                vec!["commonAuthId=abc".into()],
            )]),
        );
        let json = serde_json::to_string(&context).unwrap();
        assert!(json.contains("\"grant_type\":\"refresh_token\""));
        let parsed: GrantContext = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, context);
    }
}
