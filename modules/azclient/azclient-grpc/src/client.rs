//! Client facade: one call from a domain request to a domain outcome.

use std::sync::Arc;

use async_trait::async_trait;
use azclient_sdk::{AuthorizationChecker, AuthorizationRequest, AzClientError, CheckOutcome};
use tracing::field::Empty;

use crate::config::{AzConfig, AzOption};
use crate::mapper::{request_to_wire, response_from_wire};
use crate::transport::{GrpcPdpTransport, PdpTransport, TransportError, code_name};

/// Authorization client for a Permguard PDP.
///
/// Holds no per-call state; share it behind an `Arc` for concurrent checks.
#[derive(Clone)]
pub struct AzClient {
    config: AzConfig,
    transport: Arc<dyn PdpTransport>,
}

impl std::fmt::Debug for AzClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AzClient {
    /// Creates a client from option functions applied over the defaults.
    ///
    /// ```ignore
    /// let client = AzClient::new([with_endpoint("localhost", 9094)]);
    /// ```
    #[must_use]
    pub fn new(opts: impl IntoIterator<Item = AzOption>) -> Self {
        Self::from_config(AzConfig::with_options(opts))
    }

    /// Creates a client talking gRPC to the configured endpoint.
    #[must_use]
    pub fn from_config(config: AzConfig) -> Self {
        let transport = Arc::new(GrpcPdpTransport::new(&config.pdp_endpoint));
        Self::with_transport(config, transport)
    }

    /// Creates a client over a custom transport.
    #[must_use]
    pub fn with_transport(config: AzConfig, transport: Arc<dyn PdpTransport>) -> Self {
        Self { config, transport }
    }

    #[must_use]
    pub fn config(&self) -> &AzConfig {
        &self.config
    }

    /// Checks an authorization request against the PDP.
    ///
    /// Fails closed: any failure yields `decision == false`, no response and
    /// the error. An absent request is rejected before the transport is used.
    #[tracing::instrument(skip_all, fields(zone_id = Empty, evaluations = Empty))]
    pub async fn check<'a>(
        &self,
        request: impl Into<Option<&'a AuthorizationRequest>>,
    ) -> CheckOutcome {
        let Some(request) = request.into() else {
            tracing::warn!("rejecting absent authorization request");
            return CheckOutcome::failed(AzClientError::InvalidRequest(
                "authorization request is required".to_owned(),
            ));
        };

        let span = tracing::Span::current();
        span.record("zone_id", request.authorization_model.zone_id);
        span.record("evaluations", request.evaluations.len());

        let wire = request_to_wire(request);
        tracing::debug!(
            endpoint = %self.config.pdp_endpoint.target(),
            shape = ?request.shape(),
            "sending authorization check"
        );

        match self.transport.authorization_check(wire).await {
            Ok(response) => {
                let response = response_from_wire(&response);
                tracing::debug!(decision = response.decision, "authorization check answered");
                CheckOutcome::answered(response)
            }
            Err(e) => CheckOutcome::failed(log_and_convert(&e)),
        }
    }
}

fn log_and_convert(e: &TransportError) -> AzClientError {
    let code = code_name(e.code());
    tracing::warn!(code, error = %e, "authorization check failed");
    AzClientError::rpc(code, e.to_string())
}

#[async_trait]
impl AuthorizationChecker for AzClient {
    async fn check(&self, request: Option<&AuthorizationRequest>) -> CheckOutcome {
        AzClient::check(self, request).await
    }
}
