//! Fluent builders for authorization requests.
//!
//! Entity builders ([`PrincipalBuilder`], [`SubjectBuilder`],
//! [`ResourceBuilder`], [`ActionBuilder`], [`ContextBuilder`],
//! [`EvaluationBuilder`]) are reusable templates: `build()` returns an
//! independent copy, so mutating the builder afterwards never alters a value
//! already handed out.
//!
//! Request builders are one-shot pipelines:
//! - [`AzRequestBuilder`] - composed requests with an explicit evaluation list
//! - [`AzAtomicRequestBuilder`] - a single evaluation inlined at the top level
//!
//! Builders accept any input; validation is the PDP's job.

pub mod action;
pub mod context;
pub mod evaluation;
pub mod principal;
pub mod request_atomic;
pub mod request_composed;
pub mod resource;
pub mod subject;

pub use action::ActionBuilder;
pub use context::ContextBuilder;
pub use evaluation::EvaluationBuilder;
pub use principal::PrincipalBuilder;
pub use request_atomic::AzAtomicRequestBuilder;
pub use request_composed::AzRequestBuilder;
pub use resource::ResourceBuilder;
pub use subject::SubjectBuilder;
