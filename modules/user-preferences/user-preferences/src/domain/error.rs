use std::fmt;

use user_preferences_sdk::PreferencesError;

/// Kind of write issued against a backing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
    Delete,
}

impl WriteOp {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Schema '{0}' is not registered")]
    SchemaNotFound(String),

    #[error("Failed to acquire resource client for user '{user}': {source}")]
    ClientAcquisition {
        user: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to list preference records: {0}")]
    BackingList(#[source] anyhow::Error),

    #[error("Failed to {op} preference '{key}': {source}")]
    BackingWrite {
        key: String,
        op: WriteOp,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to delete preference records: {0}")]
    BackingDelete(#[source] anyhow::Error),
}

impl DomainError {
    pub fn write(key: impl Into<String>, op: WriteOp, source: anyhow::Error) -> Self {
        Self::BackingWrite {
            key: key.into(),
            op,
            source,
        }
    }
}

impl From<DomainError> for PreferencesError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::SchemaNotFound(schema) => Self::schema_not_found(schema),
            DomainError::ClientAcquisition { user, .. } => Self::forbidden(user),
            DomainError::BackingWrite { key, op, .. } => Self::write_failed(key, op.as_str()),
            DomainError::BackingList(_) | DomainError::BackingDelete(_) => Self::internal(),
        }
    }
}
