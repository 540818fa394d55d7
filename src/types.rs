use std::convert::Infallible;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::config::NO_BINDING;

/// Opaque value derived from a session credential (SHA-256, lower-case hex).
///
/// Equal credentials always yield equal binding values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into)]
#[serde(transparent)]
pub struct BindingValue(pub String);

impl BindingValue {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comparand persisted alongside an issued token.
///
/// Produced from a [`BindingValue`] by a
/// [`BindingReferenceDeriver`](crate::BindingReferenceDeriver). Only ever
/// compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into)]
#[serde(transparent)]
pub struct BindingReference(pub String);

impl BindingReference {
    /// The sentinel recorded for tokens issued without a binding.
    #[must_use]
    pub fn none() -> Self {
        Self(NO_BINDING.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True when the token carries no binding to check: blank or the `none` sentinel.
    #[must_use]
    pub fn is_unbound(&self) -> bool {
        self.is_blank() || self.0 == NO_BINDING
    }
}

impl From<&str> for BindingReference {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// `OAuth2` grant type of the request being processed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GrantType {
    AuthorizationCode,
    RefreshToken,
    ClientCredentials,
    Password,
    /// Any grant type without a dedicated variant (device code, JWT bearer, ...).
    Other(String),
}

impl GrantType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::RefreshToken => "refresh_token",
            Self::ClientCredentials => "client_credentials",
            Self::Password => "password",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for GrantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GrantType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<String> for GrantType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "authorization_code" => Self::AuthorizationCode,
            "refresh_token" => Self::RefreshToken,
            "client_credentials" => Self::ClientCredentials,
            "password" => Self::Password,
            _ => Self::Other(s),
        }
    }
}

impl From<GrantType> for String {
    fn from(g: GrantType) -> Self {
        match g {
            GrantType::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

/// Identifier of a binding strategy, as recorded with issued tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BindingType {
    #[serde(rename = "sso-session")]
    SsoSession,
}

impl BindingType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SsoSession => "sso-session",
        }
    }
}

impl std::fmt::Display for BindingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static metadata describing a binder implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct BinderDescriptor {
    pub display_name: &'static str,
    pub description: &'static str,
    pub binding_type: BindingType,
    pub supported_grant_types: Vec<GrantType>,
}

impl BinderDescriptor {
    #[must_use]
    pub fn new(
        display_name: &'static str,
        description: &'static str,
        binding_type: BindingType,
        supported_grant_types: Vec<GrantType>,
    ) -> Self {
        Self {
            display_name,
            description,
            binding_type,
            supported_grant_types,
        }
    }

    /// Whether tokens issued under `grant_type` may be bound by this binder.
    #[must_use]
    pub fn supports(&self, grant_type: &GrantType) -> bool {
        self.supported_grant_types.contains(grant_type)
    }
}
