//! Domain models for the authorization client.
//!
//! Every optional field is an `Option`, so "absent" and "empty" stay distinct
//! across the wire mapping. Free-form attributes are carried as [`Properties`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-form attribute bag attached to subjects, resources, actions and contexts.
pub type Properties = HashMap<String, serde_json::Value>;

/// Identity kind assigned by builders when none is given.
pub const DEFAULT_IDENTITY_KIND: &str = "user";

/// Policy store kind seeded by the request builders.
pub const DEFAULT_POLICY_STORE_KIND: &str = "ledger";

fn default_identity_kind() -> String {
    DEFAULT_IDENTITY_KIND.to_owned()
}

fn default_policy_store_kind() -> String {
    DEFAULT_POLICY_STORE_KIND.to_owned()
}

/// Closed set of identity kinds understood by the PDP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKind {
    /// Human user.
    User,
    /// Workload (service, job, machine identity).
    Workload,
    /// Identity derived from attributes.
    Attribute,
}

impl IdentityKind {
    /// Wire representation of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Workload => "workload",
            Self::Attribute => "attribute",
        }
    }
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated caller invoking the check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// Identity kind (e.g. "user", "workload").
    #[serde(rename = "type", default = "default_identity_kind")]
    pub kind: String,
    /// Principal identifier.
    pub id: String,
    /// Identity provider the principal comes from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// The identity being evaluated against policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Identity kind (e.g. "user", "workload").
    #[serde(rename = "type", default = "default_identity_kind")]
    pub kind: String,
    /// Subject identifier.
    pub id: String,
    /// Identity provider the subject comes from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Attributes used in policy evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

/// The resource being accessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource type (e.g. `MagicFarmacia::Platform::Subscription`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Specific resource instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Attributes used in policy evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

/// The action being performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Action name.
    pub name: String,
    /// Attributes used in policy evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

/// Versioned policy corpus the request is evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyStore {
    #[serde(default = "default_policy_store_kind")]
    pub kind: String,
    pub id: String,
}

/// Supplemental facts (e.g. relationship graphs) sent with the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    /// Schema the items are expressed in (e.g. "cedar").
    #[serde(default)]
    pub schema: String,
    #[serde(default)]
    pub items: Vec<Properties>,
}

/// Tenant and policy scoping envelope around the evaluations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationModel {
    pub zone_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_store: Option<PolicyStore>,
    #[serde(default)]
    pub entities: Entities,
}

/// One subject/resource/action/context decision unit of a batched request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Properties>,
}

/// How a request carries its evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// A single implicit evaluation inlined in the top-level fields.
    Atomic,
    /// An explicit evaluation list; top-level fields act as defaults.
    Composed,
}

/// Authorization check request.
///
/// The same structure carries both shapes (see [`RequestShape`]); the wire
/// encoding does not distinguish them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    pub authorization_model: AuthorizationModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Properties>,
    /// Evaluations in submission order; responses correlate by position.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evaluations: Vec<Evaluation>,
}

impl AuthorizationRequest {
    /// Returns whether this request is atomic or composed.
    #[must_use]
    pub fn shape(&self) -> RequestShape {
        if self.evaluations.is_empty() {
            RequestShape::Atomic
        } else {
            RequestShape::Composed
        }
    }
}

/// Rationale attached to a decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Who a reason is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonAudience {
    /// Operator-facing diagnostics.
    Admin,
    /// End-user-facing explanation.
    User,
}

impl fmt::Display for ReasonAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Admin => "admin",
            Self::User => "user",
        })
    }
}

/// Context returned alongside a decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_admin: Option<ReasonResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_user: Option<ReasonResponse>,
}

impl ContextResponse {
    /// Present reasons, admin first.
    pub fn reasons(&self) -> impl Iterator<Item = (ReasonAudience, &ReasonResponse)> {
        self.reason_admin
            .as_ref()
            .map(|r| (ReasonAudience::Admin, r))
            .into_iter()
            .chain(self.reason_user.as_ref().map(|r| (ReasonAudience::User, r)))
    }
}

/// Result of one submitted evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextResponse>,
}

/// Authorization check response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Overall decision; `true` only when every evaluation is permitted.
    pub decision: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextResponse>,
    /// One entry per submitted evaluation, in submission order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evaluations: Vec<EvaluationResponse>,
}

impl AuthorizationResponse {
    /// Every present reason: the top-level context first, then each evaluation in order.
    pub fn reasons(&self) -> impl Iterator<Item = (ReasonAudience, &ReasonResponse)> {
        self.context
            .iter()
            .chain(self.evaluations.iter().filter_map(|e| e.context.as_ref()))
            .flat_map(ContextResponse::reasons)
    }
}
