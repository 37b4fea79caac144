use thiserror::Error;

/// Why a URL could not be turned into a navigation path.
///
/// `NavigationState::navigate` collapses both cases to `false`; the
/// `try_navigate` variants keep the reason for callers that want it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigateError {
    /// The input string is not a URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL is well-formed but no navigation path could be built from it.
    #[error("unroutable url: {0}")]
    Unroutable(String),
}

impl NavigateError {
    /// Shorthand for `NavigateError::Unroutable` with a formatted reason.
    pub fn unroutable(reason: impl Into<String>) -> Self {
        NavigateError::Unroutable(reason.into())
    }
}
