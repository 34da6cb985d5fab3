//! Permguard AZ Client SDK
//!
//! This crate provides the public API of the authorization client:
//!
//! - [`AuthorizationChecker`] - Public API trait for consumers
//! - [`AuthorizationRequest`], [`AuthorizationResponse`] - Request/response models
//! - [`builders`] - Fluent builders for every request entity
//! - [`CheckOutcome`] - Fail-closed result of a check
//! - [`AzClientError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use azclient_sdk::{AuthorizationChecker, builders::AzAtomicRequestBuilder};
//!
//! let request = AzAtomicRequestBuilder::new(
//!     273165098782,
//!     "fd1ac44e4afa4fc4beec622494d3175a",
//!     "amy.smith@acmecorp.com",
//!     "MagicFarmacia::Platform::Subscription",
//!     "MagicFarmacia::Platform::Action::create",
//! )
//! .with_resource_id("e3a786fd07e24bfa95ba4341d3695ae8")
//! .with_context_property("time", "2025-01-23T16:17:46+00:00")
//! .build();
//!
//! let outcome = checker.check(Some(&request)).await;
//! if outcome.decision {
//!     // permitted
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod builders;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::{AuthorizationChecker, CheckOutcome};
pub use error::AzClientError;
pub use models::{
    Action, AuthorizationModel, AuthorizationRequest, AuthorizationResponse, ContextResponse,
    Entities, Evaluation, EvaluationResponse, IdentityKind, PolicyStore, Principal, Properties,
    ReasonAudience, ReasonResponse, RequestShape, Resource, Subject,
};
