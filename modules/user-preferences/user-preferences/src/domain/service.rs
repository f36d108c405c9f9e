use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};
use user_preferences_sdk::{Identity, UserPreference, UserPreferenceList};

use super::error::DomainError;
use super::ports::{ResourceClient, ResourceClientFactory, SchemaLookup};
use super::reconcile::{self, PlannedWrite};
use super::record::ResourceKind;

// ============================================================================
// Service Configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Schema name resolved through `SchemaLookup` on every request.
    pub schema: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            schema: crate::config::DEFAULT_PREFERENCE_SCHEMA.to_owned(),
        }
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

pub struct Service {
    schemas: Arc<dyn SchemaLookup>,
    clients: Arc<dyn ResourceClientFactory>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(
        schemas: Arc<dyn SchemaLookup>,
        clients: Arc<dyn ResourceClientFactory>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            schemas,
            clients,
            config,
        }
    }

    pub async fn get_preferences(
        &self,
        identity: &Identity,
    ) -> Result<UserPreference, DomainError> {
        let (_, client) = self.acquire_client(identity)?;
        read_aggregate(client.as_ref(), identity).await
    }

    pub async fn list_preferences(
        &self,
        identity: &Identity,
    ) -> Result<UserPreferenceList, DomainError> {
        let preference = self.get_preferences(identity).await?;
        Ok(UserPreferenceList {
            items: vec![preference],
        })
    }

    /// Converges the caller's records to exactly `desired` and returns the
    /// state read back afterwards.
    ///
    /// The first failing write aborts the update; earlier writes stay applied.
    pub async fn update_preferences(
        &self,
        identity: &Identity,
        desired: BTreeMap<String, String>,
    ) -> Result<UserPreference, DomainError> {
        let (kind, client) = self.acquire_client(identity)?;

        let existing = client.list().await.map_err(DomainError::BackingList)?;
        let plan = reconcile::plan(&kind, existing, desired);
        let summary = plan.summary();

        for write in plan.into_writes() {
            apply(client.as_ref(), write).await?;
        }

        info!(
            user = identity.user_name(),
            created = summary.created,
            updated = summary.updated,
            deleted = summary.deleted,
            unchanged = summary.unchanged,
            "Preferences reconciled"
        );

        read_aggregate(client.as_ref(), identity).await
    }

    /// Removes all of the caller's records. `_id` does not narrow the scope.
    pub async fn delete_preferences(
        &self,
        identity: &Identity,
        _id: &str,
    ) -> Result<(), DomainError> {
        let (_, client) = self.acquire_client(identity)?;
        client
            .delete_collection()
            .await
            .map_err(DomainError::BackingDelete)?;

        info!(user = identity.user_name(), "Preferences deleted");
        Ok(())
    }

    fn acquire_client(
        &self,
        identity: &Identity,
    ) -> Result<(ResourceKind, Box<dyn ResourceClient>), DomainError> {
        let kind = self
            .schemas
            .lookup(&self.config.schema)
            .ok_or_else(|| DomainError::SchemaNotFound(self.config.schema.clone()))?;

        let client = self
            .clients
            .client_for(&kind, identity)
            .map_err(|source| DomainError::ClientAcquisition {
                user: identity.user_name().to_owned(),
                source,
            })?;

        Ok((kind, client))
    }
}

async fn read_aggregate(
    client: &dyn ResourceClient,
    identity: &Identity,
) -> Result<UserPreference, DomainError> {
    let records = client.list().await.map_err(DomainError::BackingList)?;

    let mut preference = UserPreference::empty(identity);
    preference.data = records
        .into_iter()
        .map(|record| {
            let value = record.value_string();
            (record.name, value)
        })
        .collect();

    Ok(preference)
}

async fn apply(client: &dyn ResourceClient, write: PlannedWrite) -> Result<(), DomainError> {
    let op = write.op();
    let key = write.key().to_owned();
    debug!(key = %key, op = %op, "Applying preference write");

    let result = match write {
        PlannedWrite::Update(record) => client.update(record).await.map(drop),
        PlannedWrite::Delete(name) => client.delete(&name).await,
        PlannedWrite::Create(record) => client.create(record).await.map(drop),
    };

    result.map_err(|source| DomainError::write(key, op, source))
}
