pub mod error;
pub mod local_client;
pub mod ports;
pub mod reconcile;
pub mod record;
pub mod service;
