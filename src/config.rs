use crate::error::Error;

/// Cookie set by the authentication framework to identify the SSO session.
pub const SESSION_COOKIE_NAME: &str = "commonAuthId";

/// Binding reference recorded for tokens that were issued without a binding.
pub const NO_BINDING: &str = "none";

/// Environment variable overriding [`SESSION_COOKIE_NAME`].
pub const SESSION_COOKIE_ENV: &str = "TOKEN_BINDING_SESSION_COOKIE";

/// Binder settings, fixed once a binder is constructed.
///
/// Use [`from_env()`](BinderConfig::from_env) for deployment setup,
/// or [`default()`](BinderConfig::default) with `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinderConfig {
    pub(crate) session_cookie_name: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: SESSION_COOKIE_NAME.into(),
        }
    }
}

impl BinderConfig {
    /// Create config from environment variables.
    ///
    /// # Optional env vars
    /// - `TOKEN_BINDING_SESSION_COOKIE`: name of the SSO session cookie
    ///   (default: `commonAuthId`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the variable is set but blank or not valid unicode.
    pub fn from_env() -> Result<Self, Error> {
        match std::env::var(SESSION_COOKIE_ENV) {
            Ok(name) => Self::from_cookie_name(name),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(Error::Config(format!("{SESSION_COOKIE_ENV}: {e}"))),
        }
    }

    fn from_cookie_name(name: String) -> Result<Self, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Config(format!(
                "{SESSION_COOKIE_ENV} is set but blank"
            )));
        }
        Ok(Self::default().with_session_cookie_name(name))
    }

    #[must_use]
    pub fn with_session_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.session_cookie_name = name.into();
        self
    }

    /// Name of the cookie that carries the SSO session identifier.
    #[must_use]
    pub fn session_cookie_name(&self) -> &str {
        &self.session_cookie_name
    }
}
