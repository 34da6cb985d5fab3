//! Request-side mapping.

use azclient_sdk::{
    Action, AuthorizationModel, AuthorizationRequest, Entities, Evaluation, PolicyStore,
    Principal, Properties, Resource, Subject,
};
use prost_types::Struct;

use super::value::{properties_to_struct, struct_to_properties};
use crate::proto;

#[must_use]
pub fn policy_store_to_wire(policy_store: Option<&PolicyStore>) -> Option<proto::PolicyStore> {
    policy_store.map(|p| proto::PolicyStore {
        kind: p.kind.clone(),
        id: p.id.clone(),
    })
}

#[must_use]
pub fn policy_store_from_wire(policy_store: Option<&proto::PolicyStore>) -> Option<PolicyStore> {
    policy_store.map(|p| PolicyStore {
        kind: p.kind.clone(),
        id: p.id.clone(),
    })
}

#[must_use]
pub fn principal_to_wire(principal: Option<&Principal>) -> Option<proto::Principal> {
    principal.map(|p| proto::Principal {
        r#type: p.kind.clone(),
        id: p.id.clone(),
        source: p.source.clone(),
    })
}

#[must_use]
pub fn principal_from_wire(principal: Option<&proto::Principal>) -> Option<Principal> {
    principal.map(|p| Principal {
        kind: p.r#type.clone(),
        id: p.id.clone(),
        source: p.source.clone(),
    })
}

#[must_use]
pub fn entities_to_wire(entities: Option<&Entities>) -> Option<proto::Entities> {
    entities.map(|e| proto::Entities {
        schema: e.schema.clone(),
        items: e.items.iter().map(properties_to_struct).collect(),
    })
}

#[must_use]
pub fn entities_from_wire(entities: Option<&proto::Entities>) -> Option<Entities> {
    entities.map(|e| Entities {
        schema: e.schema.clone(),
        items: e.items.iter().map(struct_to_properties).collect(),
    })
}

/// Encodes a context (or any free-form property map).
#[must_use]
pub fn context_to_wire(context: Option<&Properties>) -> Option<Struct> {
    context.map(properties_to_struct)
}

#[must_use]
pub fn context_from_wire(context: Option<&Struct>) -> Option<Properties> {
    context.map(struct_to_properties)
}

#[must_use]
pub fn subject_to_wire(subject: Option<&Subject>) -> Option<proto::Subject> {
    subject.map(|s| proto::Subject {
        r#type: s.kind.clone(),
        id: s.id.clone(),
        source: s.source.clone(),
        properties: context_to_wire(s.properties.as_ref()),
    })
}

#[must_use]
pub fn subject_from_wire(subject: Option<&proto::Subject>) -> Option<Subject> {
    subject.map(|s| Subject {
        kind: s.r#type.clone(),
        id: s.id.clone(),
        source: s.source.clone(),
        properties: context_from_wire(s.properties.as_ref()),
    })
}

#[must_use]
pub fn resource_to_wire(resource: Option<&Resource>) -> Option<proto::Resource> {
    resource.map(|r| proto::Resource {
        r#type: r.kind.clone(),
        id: r.id.clone(),
        properties: context_to_wire(r.properties.as_ref()),
    })
}

#[must_use]
pub fn resource_from_wire(resource: Option<&proto::Resource>) -> Option<Resource> {
    resource.map(|r| Resource {
        kind: r.r#type.clone(),
        id: r.id.clone(),
        properties: context_from_wire(r.properties.as_ref()),
    })
}

#[must_use]
pub fn action_to_wire(action: Option<&Action>) -> Option<proto::Action> {
    action.map(|a| proto::Action {
        name: a.name.clone(),
        properties: context_to_wire(a.properties.as_ref()),
    })
}

#[must_use]
pub fn action_from_wire(action: Option<&proto::Action>) -> Option<Action> {
    action.map(|a| Action {
        name: a.name.clone(),
        properties: context_from_wire(a.properties.as_ref()),
    })
}

fn encode_evaluation(e: &Evaluation) -> proto::EvaluationRequest {
    proto::EvaluationRequest {
        request_id: e.request_id.clone(),
        subject: subject_to_wire(e.subject.as_ref()),
        resource: resource_to_wire(e.resource.as_ref()),
        action: action_to_wire(e.action.as_ref()),
        context: context_to_wire(e.context.as_ref()),
    }
}

fn decode_evaluation(e: &proto::EvaluationRequest) -> Evaluation {
    Evaluation {
        request_id: e.request_id.clone(),
        subject: subject_from_wire(e.subject.as_ref()),
        resource: resource_from_wire(e.resource.as_ref()),
        action: action_from_wire(e.action.as_ref()),
        context: context_from_wire(e.context.as_ref()),
    }
}

#[must_use]
pub fn evaluation_to_wire(evaluation: Option<&Evaluation>) -> Option<proto::EvaluationRequest> {
    evaluation.map(encode_evaluation)
}

#[must_use]
pub fn evaluation_from_wire(evaluation: Option<&proto::EvaluationRequest>) -> Option<Evaluation> {
    evaluation.map(decode_evaluation)
}

#[must_use]
pub fn authorization_model_to_wire(
    model: Option<&AuthorizationModel>,
) -> Option<proto::AuthorizationModelRequest> {
    model.map(|m| proto::AuthorizationModelRequest {
        zone_id: m.zone_id,
        policy_store: policy_store_to_wire(m.policy_store.as_ref()),
        principal: principal_to_wire(m.principal.as_ref()),
        entities: entities_to_wire(Some(&m.entities)),
    })
}

/// Decodes the authorization model; absent entities become an empty list.
#[must_use]
pub fn authorization_model_from_wire(
    model: Option<&proto::AuthorizationModelRequest>,
) -> Option<AuthorizationModel> {
    model.map(|m| AuthorizationModel {
        zone_id: m.zone_id,
        principal: principal_from_wire(m.principal.as_ref()),
        policy_store: policy_store_from_wire(m.policy_store.as_ref()),
        entities: entities_from_wire(m.entities.as_ref()).unwrap_or_default(),
    })
}

/// Encodes a full request, evaluations in submission order.
#[must_use]
pub fn request_to_wire(request: &AuthorizationRequest) -> proto::AuthorizationCheckRequest {
    proto::AuthorizationCheckRequest {
        request_id: request.request_id.clone(),
        authorization_model: authorization_model_to_wire(Some(&request.authorization_model)),
        subject: subject_to_wire(request.subject.as_ref()),
        resource: resource_to_wire(request.resource.as_ref()),
        action: action_to_wire(request.action.as_ref()),
        context: context_to_wire(request.context.as_ref()),
        evaluations: request.evaluations.iter().map(encode_evaluation).collect(),
    }
}

/// Decodes a full request. An absent authorization model decodes to the
/// default model, since the domain field is mandatory.
#[must_use]
pub fn request_from_wire(request: &proto::AuthorizationCheckRequest) -> AuthorizationRequest {
    AuthorizationRequest {
        authorization_model: authorization_model_from_wire(request.authorization_model.as_ref())
            .unwrap_or_default(),
        request_id: request.request_id.clone(),
        subject: subject_from_wire(request.subject.as_ref()),
        resource: resource_from_wire(request.resource.as_ref()),
        action: action_from_wire(request.action.as_ref()),
        context: context_from_wire(request.context.as_ref()),
        evaluations: request.evaluations.iter().map(decode_evaluation).collect(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use azclient_sdk::builders::{
        ActionBuilder, AzAtomicRequestBuilder, AzRequestBuilder, ContextBuilder,
        EvaluationBuilder, PrincipalBuilder, ResourceBuilder, SubjectBuilder,
    };
    use serde_json::json;

    const ZONE_ID: i64 = 273_165_098_782;
    const LEDGER_ID: &str = "fd1ac44e4afa4fc4beec622494d3175a";

    fn branch_info() -> Properties {
        serde_json::from_value(json!({
            "uid": { "type": "MagicFarmacia::Platform::BranchInfo", "id": "subscription" },
            "attrs": { "active": true },
            "parents": []
        }))
        .unwrap()
    }

    fn evaluation(request_id: &str, resource_id: &str) -> Evaluation {
        EvaluationBuilder::new(
            SubjectBuilder::new("amy")
                .with_source("keycloak")
                .with_property("isSuperUser", true)
                .build(),
            ResourceBuilder::new("document")
                .with_id(resource_id)
                .with_property("isEnabled", true)
                .build(),
            ActionBuilder::new("view").build(),
        )
        .with_request_id(request_id)
        .with_context(ContextBuilder::new().with_property("time", "2025-01-23").build())
        .build()
    }

    #[test]
    fn absent_entities_map_to_absent_wire_messages() {
        assert!(policy_store_to_wire(None).is_none());
        assert!(principal_to_wire(None).is_none());
        assert!(entities_to_wire(None).is_none());
        assert!(subject_to_wire(None).is_none());
        assert!(resource_to_wire(None).is_none());
        assert!(action_to_wire(None).is_none());
        assert!(context_to_wire(None).is_none());
        assert!(evaluation_to_wire(None).is_none());
        assert!(authorization_model_to_wire(None).is_none());

        assert!(policy_store_from_wire(None).is_none());
        assert!(principal_from_wire(None).is_none());
        assert!(entities_from_wire(None).is_none());
        assert!(subject_from_wire(None).is_none());
        assert!(resource_from_wire(None).is_none());
        assert!(action_from_wire(None).is_none());
        assert!(context_from_wire(None).is_none());
        assert!(evaluation_from_wire(None).is_none());
        assert!(authorization_model_from_wire(None).is_none());
    }

    #[test]
    fn absent_optional_fields_stay_absent() {
        let resource = ResourceBuilder::new("document").build();

        let wire = resource_to_wire(Some(&resource)).unwrap();
        assert!(wire.id.is_none());
        assert!(wire.properties.is_none());

        let decoded = resource_from_wire(Some(&wire)).unwrap();
        assert_eq!(decoded, resource);
    }

    #[test]
    fn atomic_request_encodes_top_level_fields() {
        let request = AzAtomicRequestBuilder::new(
            ZONE_ID,
            LEDGER_ID,
            "platform-creator",
            "MagicFarmacia::Platform::Subscription",
            "MagicFarmacia::Platform::Action::create",
        )
        .with_request_id("1234")
        .with_principal(PrincipalBuilder::new("amy.smith@acmecorp.com").build())
        .with_entities_items("cedar", Some(vec![branch_info()]))
        .with_subject_workload_type()
        .with_resource_id("e3a786fd07e24bfa95ba4341d3695ae8")
        .with_context_property("isSubscriptionActive", true)
        .build();

        let wire = request_to_wire(&request);
        let model = wire.authorization_model.as_ref().unwrap();

        assert_eq!(wire.request_id.as_deref(), Some("1234"));
        assert_eq!(model.zone_id, ZONE_ID);
        assert_eq!(model.policy_store.as_ref().unwrap().kind, "ledger");
        assert_eq!(model.principal.as_ref().unwrap().r#type, "user");
        let entities = model.entities.as_ref().unwrap();
        assert_eq!(entities.schema, "cedar");
        assert_eq!(entities.items.len(), 1);
        assert_eq!(wire.subject.as_ref().unwrap().r#type, "workload");
        assert!(wire.subject.as_ref().unwrap().properties.is_none());
        assert!(wire.context.is_some());
        assert!(wire.evaluations.is_empty());

        assert_eq!(request_from_wire(&wire), request);
    }

    #[test]
    fn composed_request_round_trips_in_order() {
        let request = AzRequestBuilder::new(ZONE_ID, LEDGER_ID)
            .with_entities_map("cedar", branch_info())
            .with_subject(SubjectBuilder::new("default-subject").build())
            .with_evaluation(evaluation("e1", "d-1"))
            .with_evaluation(evaluation("e2", "d-2"))
            .with_evaluation(evaluation("e3", "d-3"))
            .build();

        let wire = request_to_wire(&request);
        let ids: Vec<_> = wire
            .evaluations
            .iter()
            .map(|e| e.request_id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, ["e1", "e2", "e3"]);
        assert!(wire.resource.is_none());

        assert_eq!(request_from_wire(&wire), request);
    }

    #[test]
    fn missing_model_and_entities_decode_to_defaults() {
        let wire = proto::AuthorizationCheckRequest::default();
        let request = request_from_wire(&wire);

        assert_eq!(request.authorization_model, AuthorizationModel::default());
        assert!(request.authorization_model.entities.items.is_empty());

        let model = authorization_model_from_wire(Some(&proto::AuthorizationModelRequest {
            zone_id: 7,
            ..proto::AuthorizationModelRequest::default()
        }))
        .unwrap();
        assert_eq!(model.zone_id, 7);
        assert_eq!(model.entities, Entities::default());
        assert!(model.policy_store.is_none());
    }
}
