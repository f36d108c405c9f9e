//! `UserPreferencesClientV1` trait definition.
//!
//! This trait defines the public API for the user-preferences module (Version 1).
//! Every method is scoped to the `Identity` of the caller.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::errors::PreferencesError;
use crate::models::{Identity, UserPreference, UserPreferenceList};

/// Public API trait for the user-preferences module (Version 1).
#[async_trait]
pub trait UserPreferencesClientV1: Send + Sync {
    /// Get all preferences of the calling user as one object.
    /// Returns an empty mapping if the user has no preferences.
    async fn get_preferences(
        &self,
        identity: &Identity,
    ) -> Result<UserPreference, PreferencesError>;

    /// List preferences. The result always holds exactly the caller's object.
    async fn list_preferences(
        &self,
        identity: &Identity,
    ) -> Result<UserPreferenceList, PreferencesError>;

    /// Replace the caller's preferences with `data` (PUT semantics).
    /// Keys missing from `data` are removed. Returns the stored state.
    async fn update_preferences(
        &self,
        identity: &Identity,
        data: BTreeMap<String, String>,
    ) -> Result<UserPreference, PreferencesError>;

    /// Remove every preference of the caller. `id` is accepted for
    /// object-store conformance and does not narrow the deletion.
    async fn delete_preferences(
        &self,
        identity: &Identity,
        id: &str,
    ) -> Result<(), PreferencesError>;
}
