//! Builder for [`Evaluation`].

use crate::models::{Action, Evaluation, Properties, Resource, Subject};

/// Builds one decision unit for a composed request.
#[derive(Debug, Clone)]
pub struct EvaluationBuilder {
    evaluation: Evaluation,
}

impl EvaluationBuilder {
    #[must_use]
    pub fn new(subject: Subject, resource: Resource, action: Action) -> Self {
        Self {
            evaluation: Evaluation {
                request_id: None,
                subject: Some(subject),
                resource: Some(resource),
                action: Some(action),
                context: None,
            },
        }
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.evaluation.request_id = Some(request_id.into());
        self
    }

    /// Replace the evaluation context; `None` clears it.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<Option<Properties>>) -> Self {
        self.evaluation.context = context.into();
        self
    }

    #[must_use]
    pub fn build(&self) -> Evaluation {
        self.evaluation.clone()
    }
}
