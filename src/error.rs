//! Error taxonomy for talking to the posts service.
//!
//! Validation problems never become an `ApiError`: they stay on the
//! `DraftForm` as field errors and no request is sent.

use thiserror::Error;

/// A failed call to the remote collection service. Every variant is
/// recoverable by the user re-triggering the action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network unreachable, timeout, or an undecodable response body
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status
    #[error("server returned status {status}")]
    Service { status: u16 },
}
