//! Token binder contract and strategies.
//!
//! A [`TokenBinder`] derives a binding value when a token is issued and later
//! checks that a request still matches the binding reference recorded with the
//! token. The grant-processing engine holds the active binder, usually as
//! `Arc<dyn TokenBinder>`, and makes the accept/reject decision itself.
//!
//! ```rust,ignore
//! use sso_token_binding::{LiveRequest, RequestView, SsoSessionBinder, TokenBinder};
//!
//! let binder = SsoSessionBinder::new(BinderConfig::from_env()?);
//!
//! // Issuance: bind the token to the caller's SSO session.
//! let value = binder.derive_or_generate_binding_value(&request)?;
//! let reference = deriver.derive_reference(&value); // persisted with the token
//!
//! // Later use on a live request.
//! let ok = binder.is_valid_binding(Some(RequestView::Live(&request)), &reference)?;
//!
//! // Refresh: only the recorded request is available.
//! let ok = binder.is_valid_grant_binding(&grant_context, &reference);
//! ```

mod sso_session;

use axum_extra::extract::cookie::CookieJar;

pub use sso_session::SsoSessionBinder;

use crate::error::Error;
use crate::request::{GrantContext, LiveRequest, RequestView};
use crate::types::{BinderDescriptor, BindingReference, BindingValue};

/// Capabilities every binding strategy provides.
///
/// Implementations hold no per-request state, so one instance serves
/// concurrent requests.
pub trait TokenBinder: Send + Sync {
    /// Name, description, binding type and supported grant types.
    fn descriptor(&self) -> &BinderDescriptor;

    /// Binding value for a token about to be issued.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BindingUnavailable`] if the request carries nothing to bind to.
    fn derive_or_generate_binding_value(&self, request: &LiveRequest)
    -> Result<BindingValue, Error>;

    /// Binding value for a request presenting an already issued token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BindingUnavailable`] if the request carries nothing to bind to.
    fn binding_value(&self, request: &LiveRequest) -> Result<BindingValue, Error>;

    /// Attach whatever the client must present on later requests.
    ///
    /// The default leaves `response` untouched, for strategies whose
    /// credential is managed elsewhere.
    fn write_binding_to_response(&self, response: CookieJar, _value: &BindingValue) -> CookieJar {
        response
    }

    /// Remove binding artifacts from the client. Defaults to a no-op.
    fn clear_binding(&self, _request: &LiveRequest, response: CookieJar) -> CookieJar {
        response
    }

    /// Check a live request against the reference recorded with its token.
    ///
    /// `None` or a blank reference yields `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRequestType`] if `request` is not a view
    /// this strategy can read. That is an integration bug, not a failed check.
    fn is_valid_binding(
        &self,
        request: Option<RequestView<'_>>,
        reference: &BindingReference,
    ) -> Result<bool, Error>;

    /// Check a grant against the reference recorded with its token, using the
    /// request stored at issuance. The only path available on refresh.
    fn is_valid_grant_binding(&self, context: &GrantContext, reference: &BindingReference)
    -> bool;
}
