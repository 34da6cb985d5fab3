//! Wire messages of the `policydecisionpoint` protocol.
//!
//! Kept by hand in the shape `prost-build` emits for `pdp.proto`, so the crate
//! builds without `protoc`. Field tags are the protocol contract; names are
//! free. Fields whose domain counterpart is optional use proto3 `optional`
//! (explicit presence), which stays wire-compatible with plain scalars.
//!
//! ```text
//! service V1PDPService {
//!   rpc AuthorizationCheck(AuthorizationCheckRequest) returns (AuthorizationCheckResponse);
//! }
//! ```

#![allow(
    clippy::derive_partial_eq_without_eq,
    clippy::doc_markdown,
    clippy::struct_field_names
)]

use prost_types::Struct;

/// Fully-qualified gRPC service name.
pub const SERVICE_NAME: &str = "policydecisionpoint.V1PDPService";

/// Method name of the single RPC.
pub const AUTHORIZATION_CHECK_METHOD: &str = "AuthorizationCheck";

/// HTTP/2 path of the `AuthorizationCheck` RPC.
pub const AUTHORIZATION_CHECK_PATH: &str = "/policydecisionpoint.V1PDPService/AuthorizationCheck";

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PolicyStore {
    #[prost(string, tag = "1")]
    pub kind: String,
    #[prost(string, tag = "2")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Principal {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(string, tag = "2")]
    pub id: String,
    #[prost(string, optional, tag = "3")]
    pub source: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Entities {
    #[prost(string, tag = "1")]
    pub schema: String,
    #[prost(message, repeated, tag = "2")]
    pub items: Vec<Struct>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Subject {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(string, tag = "2")]
    pub id: String,
    #[prost(string, optional, tag = "3")]
    pub source: Option<String>,
    #[prost(message, optional, tag = "4")]
    pub properties: Option<Struct>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Resource {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(string, optional, tag = "2")]
    pub id: Option<String>,
    #[prost(message, optional, tag = "3")]
    pub properties: Option<Struct>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Action {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub properties: Option<Struct>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EvaluationRequest {
    #[prost(string, optional, tag = "1")]
    pub request_id: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub subject: Option<Subject>,
    #[prost(message, optional, tag = "3")]
    pub resource: Option<Resource>,
    #[prost(message, optional, tag = "4")]
    pub action: Option<Action>,
    #[prost(message, optional, tag = "5")]
    pub context: Option<Struct>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthorizationModelRequest {
    #[prost(int64, tag = "1")]
    pub zone_id: i64,
    #[prost(message, optional, tag = "2")]
    pub policy_store: Option<PolicyStore>,
    #[prost(message, optional, tag = "3")]
    pub principal: Option<Principal>,
    #[prost(message, optional, tag = "4")]
    pub entities: Option<Entities>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthorizationCheckRequest {
    #[prost(string, optional, tag = "1")]
    pub request_id: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub authorization_model: Option<AuthorizationModelRequest>,
    #[prost(message, optional, tag = "3")]
    pub subject: Option<Subject>,
    #[prost(message, optional, tag = "4")]
    pub resource: Option<Resource>,
    #[prost(message, optional, tag = "5")]
    pub action: Option<Action>,
    #[prost(message, optional, tag = "6")]
    pub context: Option<Struct>,
    #[prost(message, repeated, tag = "7")]
    pub evaluations: Vec<EvaluationRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReasonResponse {
    #[prost(string, optional, tag = "1")]
    pub code: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContextResponse {
    #[prost(string, optional, tag = "1")]
    pub id: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub reason_admin: Option<ReasonResponse>,
    #[prost(message, optional, tag = "3")]
    pub reason_user: Option<ReasonResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EvaluationResponse {
    #[prost(string, optional, tag = "1")]
    pub request_id: Option<String>,
    #[prost(bool, optional, tag = "2")]
    pub decision: Option<bool>,
    #[prost(message, optional, tag = "3")]
    pub context: Option<ContextResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuthorizationCheckResponse {
    #[prost(string, optional, tag = "1")]
    pub request_id: Option<String>,
    #[prost(bool, tag = "2")]
    pub decision: bool,
    #[prost(message, optional, tag = "3")]
    pub context: Option<ContextResponse>,
    #[prost(message, repeated, tag = "4")]
    pub evaluations: Vec<EvaluationResponse>,
}
