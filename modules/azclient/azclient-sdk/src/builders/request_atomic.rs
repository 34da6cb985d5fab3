//! Builder for atomic [`AuthorizationRequest`]s.

use crate::builders::{
    ActionBuilder, AzRequestBuilder, ContextBuilder, ResourceBuilder, SubjectBuilder,
};
use crate::models::{AuthorizationRequest, IdentityKind, Principal, Properties};

/// Builds a single-evaluation request.
///
/// Facade over one subject, resource, action and context builder plus an
/// [`AzRequestBuilder`]. The finished entities land in the request's
/// top-level fields, so the request carries no `evaluations` entries and the
/// PDP treats it as one implicit evaluation.
#[derive(Debug, Clone)]
pub struct AzAtomicRequestBuilder {
    request_id: Option<String>,
    principal: Option<Principal>,
    subject: SubjectBuilder,
    resource: ResourceBuilder,
    action: ActionBuilder,
    context: ContextBuilder,
    request: AzRequestBuilder,
}

impl AzAtomicRequestBuilder {
    #[must_use]
    pub fn new(
        zone_id: i64,
        policy_store_id: impl Into<String>,
        subject_id: impl Into<String>,
        resource_kind: impl Into<String>,
        action_name: impl Into<String>,
    ) -> Self {
        Self {
            request_id: None,
            principal: None,
            subject: SubjectBuilder::new(subject_id),
            resource: ResourceBuilder::new(resource_kind),
            action: ActionBuilder::new(action_name),
            context: ContextBuilder::new(),
            request: AzRequestBuilder::new(zone_id, policy_store_id),
        }
    }

    #[must_use]
    pub fn with_entities_map(mut self, schema: impl Into<String>, entities: Properties) -> Self {
        self.request = self.request.with_entities_map(schema, entities);
        self
    }

    #[must_use]
    pub fn with_entities_items(
        mut self,
        schema: impl Into<String>,
        entities: Option<Vec<Properties>>,
    ) -> Self {
        self.request = self.request.with_entities_items(schema, entities);
        self
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    #[must_use]
    pub fn with_principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    #[must_use]
    pub fn with_subject_type(mut self, kind: impl Into<String>) -> Self {
        self.subject = self.subject.with_type(kind);
        self
    }

    #[must_use]
    pub fn with_subject_user_type(self) -> Self {
        self.with_subject_type(IdentityKind::User.as_str())
    }

    #[must_use]
    pub fn with_subject_workload_type(self) -> Self {
        self.with_subject_type(IdentityKind::Workload.as_str())
    }

    #[must_use]
    pub fn with_subject_attribute_type(self) -> Self {
        self.with_subject_type(IdentityKind::Attribute.as_str())
    }

    #[must_use]
    pub fn with_subject_source(mut self, source: impl Into<String>) -> Self {
        self.subject = self.subject.with_source(source);
        self
    }

    #[must_use]
    pub fn with_subject_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.subject = self.subject.with_property(key, value);
        self
    }

    #[must_use]
    pub fn with_resource_id(mut self, id: impl Into<String>) -> Self {
        self.resource = self.resource.with_id(id);
        self
    }

    #[must_use]
    pub fn with_resource_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.resource = self.resource.with_property(key, value);
        self
    }

    #[must_use]
    pub fn with_action_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.action = self.action.with_property(key, value);
        self
    }

    #[must_use]
    pub fn with_context_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.context = self.context.with_property(key, value);
        self
    }

    #[must_use]
    pub fn build(self) -> AuthorizationRequest {
        self.request
            .with_principal(self.principal)
            .with_request_id(self.request_id)
            .with_subject(self.subject.build())
            .with_resource(self.resource.build())
            .with_action(self.action.build())
            .with_context(self.context.build())
            .build()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::builders::PrincipalBuilder;
    use crate::models::RequestShape;
    use serde_json::json;

    fn builder() -> AzAtomicRequestBuilder {
        AzAtomicRequestBuilder::new(
            273_165_098_782,
            "fd1ac44e4afa4fc4beec622494d3175a",
            "platform-creator",
            "MagicFarmacia::Platform::Subscription",
            "MagicFarmacia::Platform::Action::create",
        )
    }

    #[test]
    fn minimal_request_is_inlined_at_top_level() {
        let request = builder().build();

        assert_eq!(request.shape(), RequestShape::Atomic);
        assert!(request.evaluations.is_empty());
        assert!(request.request_id.is_none());
        assert!(request.authorization_model.principal.is_none());
        assert!(request.context.is_none());

        let subject = request.subject.unwrap();
        assert_eq!(subject.id, "platform-creator");
        assert_eq!(subject.kind, "user");
        assert_eq!(
            request.resource.unwrap().kind,
            "MagicFarmacia::Platform::Subscription"
        );
        assert_eq!(
            request.action.unwrap().name,
            "MagicFarmacia::Platform::Action::create"
        );
    }

    #[test]
    fn delegating_setters_reach_inner_builders() {
        let request = builder()
            .with_request_id("1234")
            .with_principal(PrincipalBuilder::new("amy.smith@acmecorp.com").build())
            .with_entities_items("cedar", Some(vec![Properties::new()]))
            .with_subject_workload_type()
            .with_subject_source("keycloak")
            .with_subject_property("isSuperUser", true)
            .with_resource_id("e3a786fd07e24bfa95ba4341d3695ae8")
            .with_resource_property("isEnabled", true)
            .with_action_property("isEnabled", true)
            .with_context_property("time", "2025-01-23T16:17:46+00:00")
            .with_context_property("isSubscriptionActive", true)
            .build();

        assert_eq!(request.request_id.as_deref(), Some("1234"));
        assert_eq!(
            request.authorization_model.principal.unwrap().id,
            "amy.smith@acmecorp.com"
        );
        assert_eq!(request.authorization_model.entities.items.len(), 1);

        let subject = request.subject.unwrap();
        assert_eq!(subject.kind, "workload");
        assert_eq!(subject.source.as_deref(), Some("keycloak"));
        assert_eq!(subject.properties.unwrap()["isSuperUser"], json!(true));

        let resource = request.resource.unwrap();
        assert_eq!(resource.id.as_deref(), Some("e3a786fd07e24bfa95ba4341d3695ae8"));
        assert_eq!(resource.properties.unwrap()["isEnabled"], json!(true));
        assert_eq!(
            request.action.unwrap().properties.unwrap()["isEnabled"],
            json!(true)
        );

        let context = request.context.unwrap();
        assert_eq!(context.len(), 2);
        assert_eq!(context["isSubscriptionActive"], json!(true));
    }

    #[test]
    fn subject_kind_setters() {
        let kind = |b: AzAtomicRequestBuilder| b.build().subject.unwrap().kind;

        assert_eq!(kind(builder().with_subject_attribute_type()), "attribute");
        assert_eq!(
            kind(builder().with_subject_workload_type().with_subject_user_type()),
            "user"
        );
        assert_eq!(kind(builder().with_subject_type("role-actor")), "role-actor");
    }
}
