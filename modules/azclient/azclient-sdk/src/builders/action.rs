//! Builder for [`Action`].

use crate::models::Action;

#[derive(Debug, Clone)]
pub struct ActionBuilder {
    action: Action,
}

impl ActionBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            action: Action {
                name: name.into(),
                properties: None,
            },
        }
    }

    /// Add a single property; a repeated key overwrites the previous value.
    #[must_use]
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.action
            .properties
            .get_or_insert_default()
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn build(&self) -> Action {
        self.action.clone()
    }
}
