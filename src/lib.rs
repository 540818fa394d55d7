#![doc = include_str!("../README.md")]

pub mod binder;
pub mod config;
pub mod digest;
pub mod error;
#[cfg(feature = "axum")]
mod extract;
pub mod request;
pub mod types;

// Re-exports for convenient access
pub use binder::{SsoSessionBinder, TokenBinder};
pub use config::{BinderConfig, NO_BINDING, SESSION_COOKIE_NAME};
pub use digest::{BindingReferenceDeriver, Sha256ReferenceDeriver, sha256_hex};
pub use error::Error;
pub use request::{
    Credential, GrantContext, HttpRequestHeader, LiveRequest, RequestView, StoredRequest,
};
pub use types::{BinderDescriptor, BindingReference, BindingType, BindingValue, GrantType};
