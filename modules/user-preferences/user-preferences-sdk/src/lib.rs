//! User Preferences SDK
//!
//! This crate provides the public API for the user-preferences module:
//! - `UserPreferencesClientV1` trait for inter-module communication
//! - Model types (`Identity`, `UserPreference`, `UserPreferenceList`)
//! - Error type (`PreferencesError`)
//!
//! ```ignore
//! let prefs = client.get_preferences(&Identity::new("alice")).await?;
//! let theme = prefs.data.get("theme");
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::UserPreferencesClientV1;
pub use errors::PreferencesError;
pub use models::{Identity, USER_PREFERENCE_TYPE, UserPreference, UserPreferenceList};
