//! Builder for [`Principal`].

use crate::models::{DEFAULT_IDENTITY_KIND, IdentityKind, Principal};

/// Builds the caller identity attached to the authorization model.
#[derive(Debug, Clone)]
pub struct PrincipalBuilder {
    principal: Principal,
}

impl PrincipalBuilder {
    /// Start a principal with the given id and the default `user` kind.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            principal: Principal {
                kind: DEFAULT_IDENTITY_KIND.to_owned(),
                id: id.into(),
                source: None,
            },
        }
    }

    /// Set the identity kind.
    #[must_use]
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.principal.kind = kind.into();
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
        self.principal.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn build(&self) -> Principal {
        self.principal.clone()
    }
}
