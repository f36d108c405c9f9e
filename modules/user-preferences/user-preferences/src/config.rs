//! Configuration for the User Preferences module.

use serde::Deserialize;

use crate::domain::service::ServiceConfig;

/// Schema under which preference records are registered by default.
pub const DEFAULT_PREFERENCE_SCHEMA: &str = "management.cattle.io.preference";

/// Configuration for the User Preferences module.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct UserPreferencesConfig {
    /// Name of the schema describing the backing preference records.
    /// Default: `"management.cattle.io.preference"`
    pub schema: String,
}

impl Default for UserPreferencesConfig {
    fn default() -> Self {
        Self {
            schema: DEFAULT_PREFERENCE_SCHEMA.to_owned(),
        }
    }
}

impl UserPreferencesConfig {
    #[must_use]
    pub fn to_service_config(&self) -> ServiceConfig {
        ServiceConfig {
            schema: self.schema.clone(),
        }
    }
}
