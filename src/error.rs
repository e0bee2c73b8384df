//! Error types for the 1secmail client.

use thiserror::Error;

/// Error type for all mailbox operations.
///
/// Callers only ever need to match these three kinds; the [`From`]
/// conversion below classifies every `reqwest` failure into one of them
/// so no raw transport error escapes the crate boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-layer failure: connection refused, DNS, TLS, timeout.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The provider responded but rejected the request semantically:
    /// short allocation, invalid message id, undecodable payload.
    #[error("api error: {0}")]
    Api(String),
    /// Any other failure below the client boundary.
    #[error("mail service error: {0}")]
    Service(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_status() || err.is_decode() {
            Error::Api(err.to_string())
        } else if err.is_builder() {
            Error::Service(err.to_string())
        } else {
            Error::Network(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = Error::Api("requested 5 mailboxes, provider returned 1".to_string());
        assert_eq!(
            err.to_string(),
            "api error: requested 5 mailboxes, provider returned 1"
        );
    }

    #[test]
    fn service_error_display() {
        let err = Error::Service("invalid proxy url".to_string());
        assert!(err.to_string().starts_with("mail service error"));
    }
}
