//! RPC collaborator used by the client facade.
//!
//! [`PdpTransport`] is the single seam between the facade and the network:
//! one wire request in, one wire response (or failure) out. Timeouts,
//! cancellation and connection handling belong to the implementation.

use async_trait::async_trait;
use http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, GrpcMethod, Request};

use crate::config::PdpEndpoint;
use crate::proto;

/// Failure reported by a [`PdpTransport`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The channel could not be opened or became unusable.
    #[error("cannot reach pdp: {0}")]
    Connect(#[from] tonic::transport::Error),

    /// The call completed with a non-OK gRPC status.
    #[error("pdp returned {}: {}", code_name(.0.code()), .0.message())]
    Status(Box<tonic::Status>),
}

impl From<tonic::Status> for TransportError {
    fn from(status: tonic::Status) -> Self {
        Self::Status(Box::new(status))
    }
}

impl TransportError {
    /// gRPC status code; connection failures report `Unavailable`.
    #[must_use]
    pub fn code(&self) -> Code {
        match self {
            Self::Connect(_) => Code::Unavailable,
            Self::Status(status) => status.code(),
        }
    }
}

/// Stable snake_case name of a gRPC status code.
#[must_use]
pub const fn code_name(code: Code) -> &'static str {
    match code {
        Code::Ok => "ok",
        Code::Cancelled => "cancelled",
        Code::Unknown => "unknown",
        Code::InvalidArgument => "invalid_argument",
        Code::DeadlineExceeded => "deadline_exceeded",
        Code::NotFound => "not_found",
        Code::AlreadyExists => "already_exists",
        Code::PermissionDenied => "permission_denied",
        Code::ResourceExhausted => "resource_exhausted",
        Code::FailedPrecondition => "failed_precondition",
        Code::Aborted => "aborted",
        Code::OutOfRange => "out_of_range",
        Code::Unimplemented => "unimplemented",
        Code::Internal => "internal",
        Code::Unavailable => "unavailable",
        Code::DataLoss => "data_loss",
        Code::Unauthenticated => "unauthenticated",
    }
}

/// The `AuthorizationCheck` RPC.
#[async_trait]
pub trait PdpTransport: Send + Sync {
    /// Send one authorization check and wait for its response.
    ///
    /// # Errors
    ///
    /// - [`TransportError::Connect`] if the PDP cannot be reached
    /// - [`TransportError::Status`] if the PDP (or the channel) answers with an error status
    async fn authorization_check(
        &self,
        request: proto::AuthorizationCheckRequest,
    ) -> Result<proto::AuthorizationCheckResponse, TransportError>;
}

/// tonic-based transport.
///
/// Opens a fresh plaintext HTTP/2 channel for every call, so the transport
/// holds no connection state between checks.
#[derive(Debug, Clone)]
pub struct GrpcPdpTransport {
    target: String,
}

impl GrpcPdpTransport {
    #[must_use]
    pub fn new(endpoint: &PdpEndpoint) -> Self {
        Self {
            target: endpoint.target(),
        }
    }

    /// URI the transport connects to.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    async fn connect(&self) -> Result<Channel, TransportError> {
        tracing::debug!(endpoint = %self.target, "connecting to pdp");
        let channel = Endpoint::from_shared(self.target.clone())?
            .connect()
            .await?;
        Ok(channel)
    }
}

#[async_trait]
impl PdpTransport for GrpcPdpTransport {
    async fn authorization_check(
        &self,
        request: proto::AuthorizationCheckRequest,
    ) -> Result<proto::AuthorizationCheckResponse, TransportError> {
        let mut grpc = tonic::client::Grpc::new(self.connect().await?);
        grpc.ready().await?;

        let codec = tonic_prost::ProstCodec::default();
        let path = PathAndQuery::from_static(proto::AUTHORIZATION_CHECK_PATH);
        let mut request = Request::new(request);
        request.extensions_mut().insert(GrpcMethod::new(
            proto::SERVICE_NAME,
            proto::AUTHORIZATION_CHECK_METHOD,
        ));

        let response = grpc.unary(request, path, codec).await?;
        Ok(response.into_inner())
    }
}
