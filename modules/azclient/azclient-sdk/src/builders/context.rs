//! Builder for the evaluation context.

use crate::models::Properties;

/// Builds an opaque context map.
///
/// The context is never validated; it reaches the PDP verbatim.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    context: Option<Properties>,
}

impl ContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single entry; a repeated key overwrites the previous value.
    #[must_use]
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.context
            .get_or_insert_default()
            .insert(key.into(), value.into());
        self
    }

    /// Returns the context, or `None` when no entry was ever set.
    #[must_use]
    pub fn build(&self) -> Option<Properties> {
        self.context.clone()
    }
}
