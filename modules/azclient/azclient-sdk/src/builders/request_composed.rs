//! Builder for composed [`AuthorizationRequest`]s.

use crate::models::{
    Action, AuthorizationModel, AuthorizationRequest, DEFAULT_POLICY_STORE_KIND, Entities,
    Evaluation, PolicyStore, Principal, Properties, Resource, Subject,
};

/// Builds a request with an explicit list of evaluations.
///
/// Top-level subject, resource, action and context act as request-wide
/// defaults for evaluations that omit their own. Unlike the entity
/// builders this is a one-shot pipeline: [`AzRequestBuilder::build`] hands
/// over the request it has been assembling.
#[derive(Debug, Clone)]
pub struct AzRequestBuilder {
    request: AuthorizationRequest,
}

impl AzRequestBuilder {
    /// Start a request scoped to a zone and a ledger policy store.
    #[must_use]
    pub fn new(zone_id: i64, policy_store_id: impl Into<String>) -> Self {
        Self {
            request: AuthorizationRequest {
                authorization_model: AuthorizationModel {
                    zone_id,
                    principal: None,
                    policy_store: Some(PolicyStore {
                        kind: DEFAULT_POLICY_STORE_KIND.to_owned(),
                        id: policy_store_id.into(),
                    }),
                    entities: Entities::default(),
                },
                ..AuthorizationRequest::default()
            },
        }
    }

    #[must_use]
    pub fn with_principal(mut self, principal: impl Into<Option<Principal>>) -> Self {
        self.request.authorization_model.principal = principal.into();
        self
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<Option<String>>) -> Self {
        self.request.request_id = request_id.into();
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<Option<Subject>>) -> Self {
        self.request.subject = subject.into();
        self
    }

    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<Option<Resource>>) -> Self {
        self.request.resource = resource.into();
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: impl Into<Option<Action>>) -> Self {
        self.request.action = action.into();
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<Option<Properties>>) -> Self {
        self.request.context = context.into();
        self
    }

    /// Set the entities to a single fact.
    #[must_use]
    pub fn with_entities_map(mut self, schema: impl Into<String>, entities: Properties) -> Self {
        self.request.authorization_model.entities = Entities {
            schema: schema.into(),
            items: vec![entities],
        };
        self
    }

    /// Set the entities to a list of facts; `None` leaves an empty list.
    #[must_use]
    pub fn with_entities_items(
        mut self,
        schema: impl Into<String>,
        entities: Option<Vec<Properties>>,
    ) -> Self {
        self.request.authorization_model.entities = Entities {
            schema: schema.into(),
            items: entities.unwrap_or_default(),
        };
        self
    }

    /// Append an evaluation; responses follow the order of these calls.
    #[must_use]
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.request.evaluations.push(evaluation);
        self
    }

    #[must_use]
    pub fn build(self) -> AuthorizationRequest {
        self.request
    }
}
