//! User Preferences Module Implementation
//!
//! Stores each preference of a user as its own backing record and presents
//! them as a single `userpreference` object. Updates reconcile the stored
//! records against the requested mapping with the fewest writes.
//!
//! The public API is defined in `user-preferences-sdk` and re-exported here.

pub use user_preferences_sdk::{
    Identity, PreferencesError, UserPreference, UserPreferenceList, UserPreferencesClientV1,
};

pub mod module;
pub use module::UserPreferencesModule;

pub mod config;
pub use config::UserPreferencesConfig;

#[doc(hidden)]
pub mod api;
pub mod domain;
pub mod infra;
