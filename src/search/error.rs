//! Error types for the search layer.

use thiserror::Error;

/// Errors that cross the public search boundary.
///
/// Only two things are hard failures: invalid input and cancellation.
/// Every search-semantics "no result" condition is an empty result or an
/// informational sink message, never an error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The caller handed in something unusable (e.g. a scope naming a
    /// project that is not in the workspace). Fails fast.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The cancellation token fired. Distinct from every "no results"
    /// condition.
    #[error("search cancelled")]
    Cancelled,
}

/// Failures of the remote declaration path.
///
/// These never escape the dispatcher: any remote failure is a routing
/// decision that triggers local fallback (unless the cancellation token
/// fired, which surfaces as [`SearchError::Cancelled`]).
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The remote worker is not running or the feature is disabled.
    #[error("remote worker unavailable")]
    Unavailable,

    /// The round-trip itself failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The payload could not be encoded or decoded.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The response carried an incompatible wire version.
    #[error("wire version mismatch: expected {expected}, got {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::Protocol(err.to_string())
    }
}
