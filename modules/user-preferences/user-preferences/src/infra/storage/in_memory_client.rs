//! In-memory backing store for preference records.
//!
//! Records are partitioned by user name. Every write assigns a fresh
//! resource version, and updates carrying a stale version are rejected,
//! which mirrors the optimistic concurrency of cluster-backed stores.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{anyhow, bail};
use async_trait::async_trait;
use parking_lot::Mutex;
use user_preferences_sdk::Identity;

use crate::domain::ports::{ResourceClient, ResourceClientFactory};
use crate::domain::record::{PreferenceRecord, ResourceKind};

type UserRecords = BTreeMap<String, PreferenceRecord>;

#[derive(Default)]
pub struct InMemoryResourceStore {
    users: Mutex<HashMap<String, UserRecords>>,
    next_version: AtomicU64,
}

impl InMemoryResourceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of one user's records, ordered by name.
    #[must_use]
    pub fn records(&self, user: &str) -> Vec<PreferenceRecord> {
        self.users
            .lock()
            .get(user)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Stores `record` as-is apart from a new resource version, replacing any
    /// record with the same name. Used to seed state written out of band.
    pub fn put(&self, user: &str, mut record: PreferenceRecord) -> PreferenceRecord {
        record.metadata.resource_version = Some(self.bump_version());
        self.users
            .lock()
            .entry(user.to_owned())
            .or_default()
            .insert(record.name.clone(), record.clone());
        record
    }

    fn bump_version(&self) -> String {
        (self.next_version.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}

/// Hands out clients scoped to one user of a shared [`InMemoryResourceStore`].
pub struct InMemoryClientFactory {
    store: Arc<InMemoryResourceStore>,
}

impl InMemoryClientFactory {
    #[must_use]
    pub fn new(store: Arc<InMemoryResourceStore>) -> Self {
        Self { store }
    }
}

impl ResourceClientFactory for InMemoryClientFactory {
    fn client_for(
        &self,
        kind: &ResourceKind,
        identity: &Identity,
    ) -> anyhow::Result<Box<dyn ResourceClient>> {
        if identity.user_name().is_empty() {
            bail!("identity has no user name");
        }
        Ok(Box::new(InMemoryResourceClient {
            store: Arc::clone(&self.store),
            user: identity.user_name().to_owned(),
            kind: kind.clone(),
        }))
    }
}

pub struct InMemoryResourceClient {
    store: Arc<InMemoryResourceStore>,
    user: String,
    kind: ResourceKind,
}

impl InMemoryResourceClient {
    fn check_kind(&self, record: &PreferenceRecord) -> anyhow::Result<()> {
        let api_version = self.kind.api_version();
        if record.metadata.api_version != api_version || record.metadata.kind != self.kind.kind {
            bail!(
                "record '{}' is {}/{}, expected {}/{}",
                record.name,
                record.metadata.api_version,
                record.metadata.kind,
                api_version,
                self.kind.kind
            );
        }
        Ok(())
    }
}

#[async_trait]
impl ResourceClient for InMemoryResourceClient {
    async fn list(&self) -> anyhow::Result<Vec<PreferenceRecord>> {
        Ok(self.store.records(&self.user))
    }

    async fn create(&self, mut record: PreferenceRecord) -> anyhow::Result<PreferenceRecord> {
        self.check_kind(&record)?;

        let mut users = self.store.users.lock();
        let records = users.entry(self.user.clone()).or_default();
        if records.contains_key(&record.name) {
            bail!("preference '{}' already exists", record.name);
        }

        record.metadata.resource_version = Some(self.store.bump_version());
        records.insert(record.name.clone(), record.clone());
        Ok(record)
    }

    async fn update(&self, mut record: PreferenceRecord) -> anyhow::Result<PreferenceRecord> {
        let mut users = self.store.users.lock();
        let current = users
            .get_mut(&self.user)
            .and_then(|records| records.get_mut(&record.name))
            .ok_or_else(|| anyhow!("preference '{}' not found", record.name))?;

        if let Some(expected) = &record.metadata.resource_version {
            if current.metadata.resource_version.as_ref() != Some(expected) {
                bail!(
                    "preference '{}' was modified concurrently \
                     (resource version {expected} is stale)",
                    record.name
                );
            }
        }

        record.metadata.resource_version = Some(self.store.bump_version());
        *current = record.clone();
        Ok(record)
    }

    async fn delete(&self, name: &str) -> anyhow::Result<()> {
        let mut users = self.store.users.lock();
        users
            .get_mut(&self.user)
            .and_then(|records| records.remove(name))
            .map(drop)
            .ok_or_else(|| anyhow!("preference '{name}' not found"))
    }

    async fn delete_collection(&self) -> anyhow::Result<()> {
        self.store.users.lock().remove(&self.user);
        Ok(())
    }
}
