use std::collections::HashMap;

use crate::config::DEFAULT_PREFERENCE_SCHEMA;
use crate::domain::ports::SchemaLookup;
use crate::domain::record::ResourceKind;

/// Fixed set of schemas known at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaRegistry {
    kinds: HashMap<String, ResourceKind>,
}

impl StaticSchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the default preference schema
    /// (`management.cattle.io/v3`, kind `Preference`).
    #[must_use]
    pub fn with_default_preferences() -> Self {
        Self::new().with_schema(
            DEFAULT_PREFERENCE_SCHEMA,
            ResourceKind::new("management.cattle.io", "v3", "Preference"),
        )
    }

    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>, kind: ResourceKind) -> Self {
        self.kinds.insert(schema.into(), kind);
        self
    }
}

impl SchemaLookup for StaticSchemaRegistry {
    fn lookup(&self, schema: &str) -> Option<ResourceKind> {
        self.kinds.get(schema).cloned()
    }
}
