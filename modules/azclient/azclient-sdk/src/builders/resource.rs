//! Builder for [`Resource`].

use crate::models::Resource;

/// Builds the resource being accessed.
#[derive(Debug, Clone)]
pub struct ResourceBuilder {
    resource: Resource,
}

impl ResourceBuilder {
    /// Start a resource of the given type.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            resource: Resource {
                kind: kind.into(),
                id: None,
                properties: None,
            },
        }
    }

    /// Target a specific resource instance.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.resource.id = Some(id.into());
        self
    }

    /// Add a single property; a repeated key overwrites the previous value.
    #[must_use]
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.resource
            .properties
            .get_or_insert_default()
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn build(&self) -> Resource {
        self.resource.clone()
    }
}
