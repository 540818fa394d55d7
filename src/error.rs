/// Errors raised by token binders.
///
/// A binding that simply does not match is not an error: validation returns
/// `false` for that. These variants cover the cases where a caller cannot
/// proceed or has wired the binder up incorrectly.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No usable session credential on the request, so no binding value.
    #[error("Failed to retrieve token binding value: {0}")]
    BindingUnavailable(String),

    /// The request view handed to the live validation path is not a live request.
    #[error("Unsupported request type: {0}")]
    UnsupportedRequestType(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
