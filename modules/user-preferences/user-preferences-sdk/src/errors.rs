//! Error types for the user-preferences SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferencesError {
    #[error("Preference schema '{schema}' is not registered")]
    SchemaNotFound { schema: String },

    #[error("Cannot access preferences of user '{user}'")]
    Forbidden { user: String },

    #[error("Failed to {op} preference '{key}'")]
    WriteFailed { key: String, op: String },

    #[error("Internal error")]
    Internal,
}

impl PreferencesError {
    #[must_use]
    pub fn schema_not_found(schema: impl Into<String>) -> Self {
        Self::SchemaNotFound {
            schema: schema.into(),
        }
    }

    #[must_use]
    pub fn forbidden(user: impl Into<String>) -> Self {
        Self::Forbidden { user: user.into() }
    }

    #[must_use]
    pub fn write_failed(key: impl Into<String>, op: impl Into<String>) -> Self {
        Self::WriteFailed {
            key: key.into(),
            op: op.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
