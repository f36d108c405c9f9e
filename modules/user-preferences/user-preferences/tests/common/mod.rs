#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for user-preferences integration tests

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use user_preferences::Identity;
use user_preferences::domain::error::WriteOp;
use user_preferences::domain::ports::{ResourceClient, ResourceClientFactory};
use user_preferences::domain::record::{PreferenceRecord, ResourceKind};
use user_preferences::domain::service::{Service, ServiceConfig};
use user_preferences::infra::{InMemoryClientFactory, InMemoryResourceStore, StaticSchemaRegistry};

pub const USER: &str = "alice";

type Hook = Box<dyn FnOnce() + Send>;

/// Observes every write that reaches the backing store.
#[derive(Default)]
pub struct Recorder {
    committed: Mutex<Vec<(WriteOp, String)>>,
    attempts: AtomicUsize,
    fail_at: Mutex<Option<usize>>,
    before_first_write: Mutex<Option<Hook>>,
    live: Mutex<HashSet<String>>,
    duplicate_seen: AtomicBool,
    out_of_order_seen: AtomicBool,
}

impl Recorder {
    /// Writes that succeeded, in order.
    pub fn committed(&self) -> Vec<(WriteOp, String)> {
        self.committed.lock().clone()
    }

    pub fn reset(&self) {
        self.committed.lock().clear();
        self.attempts.store(0, Ordering::SeqCst);
    }

    /// Makes the `n`-th write attempt (1-based) fail.
    pub fn fail_at(&self, n: usize) {
        *self.fail_at.lock() = Some(n);
    }

    /// Runs `hook` right before the first write attempt, simulating a
    /// concurrent writer.
    pub fn before_first_write(&self, hook: impl FnOnce() + Send + 'static) {
        *self.before_first_write.lock() = Some(Box::new(hook));
    }

    /// Registers a name already present in the store.
    pub fn mark_live(&self, name: &str) {
        self.live.lock().insert(name.to_owned());
    }

    /// A create was attempted for a name that still had a live record.
    pub fn duplicate_seen(&self) -> bool {
        self.duplicate_seen.load(Ordering::SeqCst)
    }

    /// An update or delete was attempted after a create on the same client.
    pub fn out_of_order_seen(&self) -> bool {
        self.out_of_order_seen.load(Ordering::SeqCst)
    }

    fn begin_write(&self, op: WriteOp, key: &str, creating: &AtomicBool) -> anyhow::Result<()> {
        match op {
            WriteOp::Create => {
                if self.live.lock().contains(key) {
                    self.duplicate_seen.store(true, Ordering::SeqCst);
                }
                creating.store(true, Ordering::SeqCst);
            }
            WriteOp::Update | WriteOp::Delete => {
                if creating.load(Ordering::SeqCst) {
                    self.out_of_order_seen.store(true, Ordering::SeqCst);
                }
            }
        }
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt == 1 {
            let hook = self.before_first_write.lock().take();
            if let Some(hook) = hook {
                hook();
            }
        }
        if *self.fail_at.lock() == Some(attempt) {
            anyhow::bail!("injected failure on {op} of '{key}'");
        }
        Ok(())
    }

    fn commit(&self, op: WriteOp, key: String) {
        match op {
            WriteOp::Create => {
                self.live.lock().insert(key.clone());
            }
            WriteOp::Delete => {
                self.live.lock().remove(&key);
            }
            WriteOp::Update => {}
        }
        self.committed.lock().push((op, key));
    }
}

/// Wraps a backing client and reports every write to the [`Recorder`].
/// One instance lives for one service call.
struct RecordingClient {
    inner: Box<dyn ResourceClient>,
    recorder: Arc<Recorder>,
    creating: AtomicBool,
}

impl RecordingClient {
    fn begin(&self, op: WriteOp, key: &str) -> anyhow::Result<()> {
        self.recorder.begin_write(op, key, &self.creating)
    }
}

#[async_trait]
impl ResourceClient for RecordingClient {
    async fn list(&self) -> anyhow::Result<Vec<PreferenceRecord>> {
        self.inner.list().await
    }

    async fn create(&self, record: PreferenceRecord) -> anyhow::Result<PreferenceRecord> {
        let key = record.name.clone();
        self.begin(WriteOp::Create, &key)?;
        let created = self.inner.create(record).await?;
        self.recorder.commit(WriteOp::Create, key);
        Ok(created)
    }

    async fn update(&self, record: PreferenceRecord) -> anyhow::Result<PreferenceRecord> {
        let key = record.name.clone();
        self.begin(WriteOp::Update, &key)?;
        let updated = self.inner.update(record).await?;
        self.recorder.commit(WriteOp::Update, key);
        Ok(updated)
    }

    async fn delete(&self, name: &str) -> anyhow::Result<()> {
        self.begin(WriteOp::Delete, name)?;
        self.inner.delete(name).await?;
        self.recorder.commit(WriteOp::Delete, name.to_owned());
        Ok(())
    }

    async fn delete_collection(&self) -> anyhow::Result<()> {
        self.inner.delete_collection().await?;
        self.recorder.live.lock().clear();
        Ok(())
    }
}

struct RecordingClientFactory {
    inner: InMemoryClientFactory,
    recorder: Arc<Recorder>,
}

impl ResourceClientFactory for RecordingClientFactory {
    fn client_for(
        &self,
        kind: &ResourceKind,
        identity: &Identity,
    ) -> anyhow::Result<Box<dyn ResourceClient>> {
        Ok(Box::new(RecordingClient {
            inner: self.inner.client_for(kind, identity)?,
            recorder: Arc::clone(&self.recorder),
            creating: AtomicBool::new(false),
        }))
    }
}

pub struct Harness {
    pub store: Arc<InMemoryResourceStore>,
    pub recorder: Arc<Recorder>,
    pub service: Service,
    pub identity: Identity,
    clients: Arc<RecordingClientFactory>,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryResourceStore::new());
        let recorder = Arc::new(Recorder::default());
        let clients = Arc::new(RecordingClientFactory {
            inner: InMemoryClientFactory::new(Arc::clone(&store)),
            recorder: Arc::clone(&recorder),
        });
        let service = Service::new(
            Arc::new(StaticSchemaRegistry::with_default_preferences()),
            Arc::clone(&clients) as Arc<dyn ResourceClientFactory>,
            ServiceConfig::default(),
        );
        Self {
            store,
            recorder,
            service,
            identity: Identity::new(USER),
            clients,
        }
    }

    /// Seeds records directly in the store, bypassing the service.
    pub fn seed(&self, pairs: &[(&str, &str)]) {
        for (name, value) in pairs {
            self.store
                .put(USER, PreferenceRecord::new(&preference_kind(), *name, *value));
            self.recorder.mark_live(name);
        }
    }

    /// A recording client for the harness user, for driving writes by hand.
    pub fn client(&self) -> Box<dyn ResourceClient> {
        self.clients
            .client_for(&preference_kind(), &self.identity)
            .unwrap()
    }

    pub fn stored(&self) -> BTreeMap<String, String> {
        self.store
            .records(USER)
            .into_iter()
            .map(|record| {
                let value = record.value_string();
                (record.name, value)
            })
            .collect()
    }
}

pub fn preference_kind() -> ResourceKind {
    ResourceKind::new("management.cattle.io", "v3", "Preference")
}

pub fn mapping(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}
