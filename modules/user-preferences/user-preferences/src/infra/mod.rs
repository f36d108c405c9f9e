pub mod storage;

pub use storage::in_memory_client::{InMemoryClientFactory, InMemoryResourceStore};
pub use storage::schema_registry::StaticSchemaRegistry;
