use thiserror::Error;

/// Errors from [`crate::completion::CompletionProvider::complete`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was called.
        url: String,
        /// Timeout that elapsed.
        timeout_secs: u64,
    },
    /// The connection failed before a response arrived.
    #[error("network error calling {url}: {message}")]
    Network {
        /// Endpoint that was called.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}: {message}")]
    Http {
        /// Endpoint that was called.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body or error description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode completion response: {message}")]
    Decode {
        /// Decoder error description.
        message: String,
    },
    /// The response held no completion text.
    #[error("completion response contained no content")]
    EmptyResponse,
}
