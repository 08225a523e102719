//! Error types for the roster API client.
//!
//! # Design
//! Two failure classes reach the caller. Transport-class failures cover
//! everything that stops a response from being usable: the network, a
//! non-2xx status, or a body that does not decode. `Rejected` is the
//! application class: the server answered 2xx but its envelope reported
//! `success: false`. `NotFound` keeps its own variant because 404 is the
//! common "that player is gone" case.

use thiserror::Error;

/// Errors returned by `RosterClient` parse methods and `Transport` impls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// 2xx transport, but the envelope signalled `success: false`.
    #[error("rejected by server: {message}")]
    Rejected { message: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// True for the application-level rejection class, false for
    /// transport-class failures.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let err = ApiError::HttpError {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn only_rejected_is_a_rejection() {
        let rejected = ApiError::Rejected {
            message: "no such player".to_string(),
        };
        assert!(rejected.is_rejection());
        assert!(!ApiError::NotFound.is_rejection());
        assert!(!ApiError::Transport("refused".to_string()).is_rejection());
    }
}
