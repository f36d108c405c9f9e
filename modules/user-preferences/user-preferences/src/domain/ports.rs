//! Collaborator interfaces used by the domain service.
//!
//! Implementations live in `infra` (in-memory) or in the hosting process
//! (cluster-backed clients, schema registries).

use async_trait::async_trait;
use user_preferences_sdk::Identity;

use super::record::{PreferenceRecord, ResourceKind};

/// Resolves a schema name to the descriptor of its backing resource.
pub trait SchemaLookup: Send + Sync {
    fn lookup(&self, schema: &str) -> Option<ResourceKind>;
}

/// Builds clients scoped to one user's preference records.
///
/// Called once per request; clients are never cached across requests.
pub trait ResourceClientFactory: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if no client can be built for `identity`.
    fn client_for(
        &self,
        kind: &ResourceKind,
        identity: &Identity,
    ) -> anyhow::Result<Box<dyn ResourceClient>>;
}

/// Operations over the preference records visible to one user.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<PreferenceRecord>>;

    /// Fails if a record with the same name already exists.
    async fn create(&self, record: PreferenceRecord) -> anyhow::Result<PreferenceRecord>;

    /// Replaces the record with the same name. Fails if the record is missing
    /// or its resource version is stale.
    async fn update(&self, record: PreferenceRecord) -> anyhow::Result<PreferenceRecord>;

    async fn delete(&self, name: &str) -> anyhow::Result<()>;

    /// Removes every record. Succeeds on an empty set.
    async fn delete_collection(&self) -> anyhow::Result<()>;
}
