//! Typed failures for management API calls.
//!
//! The session gate collapses every failure into "not valid"; these variants
//! exist so callers can log and display what actually went wrong.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by management API requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built, sent, or decoded.
    #[error("request failed: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The GraphQL layer reported an error message.
    #[error("{0}")]
    Graphql(String),
    /// The response decoded but lacked an expected field.
    #[error("response missing `{0}`")]
    MissingField(&'static str),
    /// Browser-only call attempted outside the browser build.
    #[error("not available on server")]
    Unavailable,
}
