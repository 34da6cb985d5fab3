//! Builder for [`Subject`].

use crate::models::{DEFAULT_IDENTITY_KIND, IdentityKind, Subject};

/// Builds the identity evaluated against policy.
#[derive(Debug, Clone)]
pub struct SubjectBuilder {
    subject: Subject,
}

impl SubjectBuilder {
    /// Start a subject with the given id and the default `user` kind.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            subject: Subject {
                kind: DEFAULT_IDENTITY_KIND.to_owned(),
                id: id.into(),
                source: None,
                properties: None,
            },
        }
    }

    /// Set the identity kind.
    #[must_use]
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.subject.kind = kind.into();
        self
    }

    #[must_use]
    pub fn with_user_type(self) -> Self {
        self.with_type(IdentityKind::User.as_str())
    }

    #[must_use]
    pub fn with_workload_type(self) -> Self {
        self.with_type(IdentityKind::Workload.as_str())
    }

    #[must_use]
    pub fn with_attribute_type(self) -> Self {
        self.with_type(IdentityKind::Attribute.as_str())
    }

    /// Set the identity provider.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.subject.source = Some(source.into());
        self
    }

    /// Add a single property; a repeated key overwrites the previous value.
    #[must_use]
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.subject
            .properties
            .get_or_insert_default()
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn build(&self) -> Subject {
        self.subject.clone()
    }
}
