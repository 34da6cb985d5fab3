//! Public API trait for authorization checks.

use async_trait::async_trait;

use crate::error::AzClientError;
use crate::models::{AuthorizationRequest, AuthorizationResponse};

/// Result of an authorization check.
///
/// Fail-closed: `decision` is `true` only when the PDP answered and granted
/// access. Callers must look at `error` before trusting `response`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Overall decision; `false` whenever the outcome is indeterminate.
    pub decision: bool,
    /// Decoded PDP response, absent on failure.
    pub response: Option<AuthorizationResponse>,
    /// Failure, if any.
    pub error: Option<AzClientError>,
}

impl CheckOutcome {
    /// Outcome carrying the PDP's answer.
    #[must_use]
    pub fn answered(response: AuthorizationResponse) -> Self {
        Self {
            decision: response.decision,
            response: Some(response),
            error: None,
        }
    }

    /// Denied outcome for a failed check.
    #[must_use]
    pub const fn failed(error: AzClientError) -> Self {
        Self {
            decision: false,
            response: None,
            error: Some(error),
        }
    }

    /// Converts into a `Result`, dropping the redundant decision flag.
    ///
    /// # Errors
    ///
    /// Returns the check error when the PDP could not be consulted.
    pub fn into_result(self) -> Result<AuthorizationResponse, AzClientError> {
        match (self.error, self.response) {
            (Some(e), _) => Err(e),
            (None, Some(response)) => Ok(response),
            (None, None) => Err(AzClientError::rpc(
                "unknown",
                "check completed without a response",
            )),
        }
    }
}

/// Public API trait for authorization checks against a PDP.
///
/// Implemented by the gRPC client facade; consumers depend on this trait so
/// they can substitute a double in tests:
///
/// ```ignore
/// let checker: Arc<dyn AuthorizationChecker> = Arc::new(AzClient::new([]));
///
/// let outcome = checker.check(Some(&request)).await;
/// ```
#[async_trait]
pub trait AuthorizationChecker: Send + Sync {
    /// Check an authorization request.
    ///
    /// An absent request is rejected locally with
    /// [`AzClientError::InvalidRequest`]; no failure escapes the returned
    /// [`CheckOutcome`].
    async fn check(&self, request: Option<&AuthorizationRequest>) -> CheckOutcome;
}
