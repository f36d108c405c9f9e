use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use user_preferences_sdk::{UserPreference, UserPreferenceList};
use utoipa::ToSchema;

use crate::domain::record::coerce_to_string;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserPreferenceDto {
    /// Always `userpreference`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The owning user name.
    pub id: String,
    pub data: BTreeMap<String, String>,
}

impl From<UserPreference> for UserPreferenceDto {
    fn from(preference: UserPreference) -> Self {
        Self {
            kind: preference.kind,
            id: preference.id,
            data: preference.data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserPreferenceListDto {
    pub data: Vec<UserPreferenceDto>,
}

impl From<UserPreferenceList> for UserPreferenceListDto {
    fn from(list: UserPreferenceList) -> Self {
        Self {
            data: list.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Full replacement of the caller's preferences.
///
/// Values may be any JSON scalar; they are stored in string form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserPreferenceRequest {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: BTreeMap<String, Value>,
}

impl UpdateUserPreferenceRequest {
    #[must_use]
    pub fn into_desired(self) -> BTreeMap<String, String> {
        self.data
            .into_iter()
            .map(|(key, value)| {
                let value = coerce_to_string(&value);
                (key, value)
            })
            .collect()
    }
}
