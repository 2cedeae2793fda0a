//! Failure taxonomy for backend requests.
//!
//! ERROR HANDLING
//! ==============
//! Lookup callers distinguish "no record" (`Ok(None)`) from "the request
//! failed" (`Err`). The session resolver and redirect policy degrade on
//! `Err` instead of surfacing it; page-level callers show a toast.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by any call in [`crate::net::api`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with an unexpected status code.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body could not be decoded into the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// The request exceeded the per-lookup deadline.
    #[error("request timed out")]
    Timeout,
}

/// Result alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;
