//! Request views built from axum requests.
//!
//! Thin wrappers only: they copy what is already on the request and never
//! decide anything about bindings.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum_extra::extract::cookie::Cookie;

use crate::request::{Credential, HttpRequestHeader, LiveRequest, StoredRequest};

impl LiveRequest {
    /// Cookies from every `Cookie` header, in the order they were sent.
    ///
    /// Fragments that do not parse as `name=value` are skipped.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|fragment| Cookie::parse(fragment.trim()).ok())
            .map(|c| Credential::new(c.name(), c.value()))
            .collect()
    }
}

impl StoredRequest {
    /// Snapshot of a request's headers, to be stored with the issued token.
    ///
    /// `Cookie` crumbs (one per header line, as HTTP/2 sends them) are joined
    /// with `"; "` into a single value. Non-UTF-8 values are dropped.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .keys()
            .map(|name| {
                let values = headers
                    .get_all(name)
                    .iter()
                    .filter_map(|v| v.to_str().ok())
                    .map(str::to_owned);
                let values: Vec<String> = if *name == COOKIE {
                    let joined = values.collect::<Vec<_>>().join("; ");
                    if joined.is_empty() { Vec::new() } else { vec![joined] }
                } else {
                    values.collect()
                };
                HttpRequestHeader::new(name.as_str(), values)
            })
            .collect()
    }
}

impl<S> FromRequestParts<S> for LiveRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
