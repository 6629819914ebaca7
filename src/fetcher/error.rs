//! Error types for fetch operations

use thiserror::Error;

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Reasons a single GET can fail
///
/// Callers treat every variant the same way; the split only feeds log output.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, DNS, TLS or timeout failure
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("GET {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Body exceeded the configured size limit
    #[error("Response from {url} exceeds limit of {limit} bytes")]
    TooLarge { url: String, limit: usize },

    /// Body could not be read or decoded
    #[error("Failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
