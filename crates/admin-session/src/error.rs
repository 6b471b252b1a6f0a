//! Error types for the admin session helpers

use thiserror::Error;

/// Errors raised while configuring or driving an admin session.
///
/// A missing token is never an error: the guard answers it with a redirect.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Configuration sources could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The configured API origin is not a valid URL
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A header value contains bytes HTTP does not allow
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// The browser refused to navigate
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// A browser API was needed but is not reachable from this context
    #[error("Browser API unavailable: {0}")]
    BrowserUnavailable(&'static str),
}

/// Result alias for admin session operations
pub type Result<T> = std::result::Result<T, SessionError>;
