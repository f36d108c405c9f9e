pub mod in_memory_client;
pub mod schema_registry;
