use std::fmt;

use axum_extra::extract::cookie::Cookie;

use super::TokenBinder;
use crate::config::BinderConfig;
use crate::digest::{self, BindingReferenceDeriver, Sha256ReferenceDeriver};
use crate::error::Error;
use crate::request::{GrantContext, HttpRequestHeader, LiveRequest, RequestView};
use crate::types::{BinderDescriptor, BindingReference, BindingType, BindingValue, GrantType};

const DISPLAY_NAME: &str = "SSO Session Based";
const DESCRIPTION: &str = "Bind token to the SSO session. Supported grant types: Code";

/// Binds tokens to the SSO session cookie set by the authentication framework.
///
/// The binding value is the SHA-256 hex of the session cookie's value, so a new
/// SSO session yields a new binding. The cookie itself belongs to the
/// authentication layer; this binder never writes or clears it.
///
/// Only authorization-code grants are bound. On refresh the recorded request's
/// `Cookie` header is checked instead of a live connection.
pub struct SsoSessionBinder<D = Sha256ReferenceDeriver> {
    config: BinderConfig,
    descriptor: BinderDescriptor,
    deriver: D,
}

impl SsoSessionBinder {
    /// Binder with the default SHA-256 reference deriver.
    #[must_use]
    pub fn new(config: BinderConfig) -> Self {
        Self::with_deriver(config, Sha256ReferenceDeriver)
    }
}

impl Default for SsoSessionBinder {
    fn default() -> Self {
        Self::new(BinderConfig::default())
    }
}

impl<D: BindingReferenceDeriver> SsoSessionBinder<D> {
    /// Binder using the token store's own reference deriver.
    #[must_use]
    pub fn with_deriver(config: BinderConfig, deriver: D) -> Self {
        Self {
            config,
            descriptor: BinderDescriptor::new(
                DISPLAY_NAME,
                DESCRIPTION,
                BindingType::SsoSession,
                vec![GrantType::AuthorizationCode],
            ),
            deriver,
        }
    }

    #[must_use]
    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    fn retrieve_binding_value(&self, request: &LiveRequest) -> Result<BindingValue, Error> {
        if request.cookies().is_empty() {
            tracing::debug!("No cookies on request, cannot derive token binding value");
            return Err(Error::BindingUnavailable("request carries no cookies".into()));
        }

        let name = self.config.session_cookie_name();
        let cookie = request
            .cookie(name)
            .filter(|c| !c.value.trim().is_empty())
            .ok_or_else(|| {
                tracing::debug!(cookie = name, "Session cookie missing or blank");
                Error::BindingUnavailable(format!("session cookie `{name}` missing or blank"))
            })?;

        Ok(digest::binding_value_of(&cookie.value))
    }

    fn reference_of(&self, session_id: &str) -> BindingReference {
        self.deriver.derive_reference(&digest::binding_value_of(session_id))
    }

    /// Session cookie value from recorded request headers.
    ///
    /// Only the first value of a `Cookie` header is read, and the first pair
    /// carrying the session cookie wins. A `Cookie` header with no values ends
    /// the search.
    fn stored_session_cookie(&self, headers: &[HttpRequestHeader]) -> Option<String> {
        let prefix = format!("{}=", self.config.session_cookie_name());

        for header in headers {
            if !header.name.eq_ignore_ascii_case("cookie") {
                continue;
            }
            let Some(value) = header.values.first() else {
                tracing::debug!("Recorded Cookie header has no value");
                return None;
            };

            let pair = value
                .split(';')
                .map(str::trim)
                .find(|pair| pair.starts_with(&prefix));
            if let Some(pair) = pair {
                return match Cookie::parse(pair) {
                    Ok(cookie) => Some(cookie.value().to_owned()),
                    Err(e) => {
                        tracing::warn!(error = %e, "Recorded session cookie failed to parse");
                        None
                    }
                };
            }
        }

        None
    }
}

impl<D: BindingReferenceDeriver> TokenBinder for SsoSessionBinder<D> {
    fn descriptor(&self) -> &BinderDescriptor {
        &self.descriptor
    }

    fn derive_or_generate_binding_value(
        &self,
        request: &LiveRequest,
    ) -> Result<BindingValue, Error> {
        self.retrieve_binding_value(request)
    }

    fn binding_value(&self, request: &LiveRequest) -> Result<BindingValue, Error> {
        self.retrieve_binding_value(request)
    }

    fn is_valid_binding(
        &self,
        request: Option<RequestView<'_>>,
        reference: &BindingReference,
    ) -> Result<bool, Error> {
        let Some(request) = request else {
            return Ok(false);
        };
        if reference.is_blank() {
            return Ok(false);
        }

        match request {
            RequestView::Live(live) => {
                let name = self.config.session_cookie_name();
                match live.cookie(name) {
                    Some(cookie) => Ok(self.reference_of(&cookie.value) == *reference),
                    None => {
                        tracing::debug!(cookie = name, "Session cookie absent on bound request");
                        Ok(false)
                    }
                }
            }
            RequestView::Stored(_) | RequestView::Other(_) => {
                let kind = request.kind();
                tracing::warn!(
                    request_type = kind,
                    "Unsupported request type for SSO session binding"
                );
                Err(Error::UnsupportedRequestType(kind.to_owned()))
            }
        }
    }

    fn is_valid_grant_binding(
        &self,
        context: &GrantContext,
        reference: &BindingReference,
    ) -> bool {
        if reference.is_unbound() {
            return true;
        }
        if context.grant_type != GrantType::RefreshToken {
            tracing::debug!(
                grant_type = %context.grant_type,
                "SSO session binding only re-validated on refresh"
            );
            return false;
        }

        match self.stored_session_cookie(context.request.headers()) {
            Some(session_id) => self.reference_of(&session_id) == *reference,
            None => false,
        }
    }
}

// Manual Debug: reference derivers are often closures.
impl<D> fmt::Debug for SsoSessionBinder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SsoSessionBinder")
            .field("config", &self.config)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
