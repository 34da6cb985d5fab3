//! Error types for the authorization client.

/// Errors surfaced by an authorization check.
///
/// A check never fails with a panic; every failure is reported through
/// [`crate::CheckOutcome::error`] with the decision forced to `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AzClientError {
    /// The request was rejected locally before any network activity.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The PDP call failed (connection, timeout, cancellation or a gRPC
    /// error status returned by the server).
    #[error("pdp call failed ({code}): {message}")]
    Rpc { code: String, message: String },
}

impl AzClientError {
    /// Shorthand for an RPC failure.
    #[must_use]
    pub fn rpc(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rpc {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Whether the error was raised locally, without contacting the PDP.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}
