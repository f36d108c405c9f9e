//! Public models for the user-preferences module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the module and its consumers.

use std::collections::BTreeMap;
use std::fmt;

/// Type tag carried by every aggregate preference object.
pub const USER_PREFERENCE_TYPE: &str = "userpreference";

/// The caller on whose behalf preferences are read or written.
///
/// Produced by upstream authentication; this module only uses the user name
/// to scope backing records and to identify the aggregate object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    user_name: String,
}

impl Identity {
    #[must_use]
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_name)
    }
}

/// All preferences of one user presented as a single object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPreference {
    /// Always [`USER_PREFERENCE_TYPE`].
    pub kind: String,
    /// The owning user name.
    pub id: String,
    /// Preference key to value.
    pub data: BTreeMap<String, String>,
}

impl UserPreference {
    /// Creates an empty aggregate for the given identity.
    #[must_use]
    pub fn empty(identity: &Identity) -> Self {
        Self {
            kind: USER_PREFERENCE_TYPE.to_owned(),
            id: identity.user_name().to_owned(),
            data: BTreeMap::new(),
        }
    }
}

/// List form of the aggregate. Holds exactly the caller's own object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPreferenceList {
    pub items: Vec<UserPreference>,
}
