//! gRPC client for the Permguard Policy Decision Point.
//!
//! - [`AzClient`] - Client facade implementing [`azclient_sdk::AuthorizationChecker`]
//! - [`config`] - Endpoint configuration and option functions
//! - [`mapper`] - Domain model to wire message mapping, both directions
//! - [`proto`] - Wire messages of the `policydecisionpoint` protocol
//! - [`transport`] - RPC collaborator trait and its tonic implementation
//!
//! ## Usage
//!
//! ```ignore
//! use azclient_grpc::{AzClient, config::with_endpoint};
//!
//! let client = AzClient::new([with_endpoint("localhost", 9094)]);
//! let outcome = client.check(&request).await;
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod client;
pub mod config;
pub mod mapper;
pub mod proto;
pub mod transport;

pub use client::AzClient;
pub use config::{AzConfig, AzOption, PdpEndpoint, with_endpoint};
pub use transport::{GrpcPdpTransport, PdpTransport, TransportError};
