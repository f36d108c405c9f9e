use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use user_preferences_sdk::{
    Identity, PreferencesError, UserPreference, UserPreferenceList, UserPreferencesClientV1,
};

use crate::domain::service::Service;

pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UserPreferencesClientV1 for LocalClient {
    async fn get_preferences(
        &self,
        identity: &Identity,
    ) -> Result<UserPreference, PreferencesError> {
        self.service
            .get_preferences(identity)
            .await
            .map_err(Into::into)
    }

    async fn list_preferences(
        &self,
        identity: &Identity,
    ) -> Result<UserPreferenceList, PreferencesError> {
        self.service
            .list_preferences(identity)
            .await
            .map_err(Into::into)
    }

    async fn update_preferences(
        &self,
        identity: &Identity,
        data: BTreeMap<String, String>,
    ) -> Result<UserPreference, PreferencesError> {
        self.service
            .update_preferences(identity, data)
            .await
            .map_err(Into::into)
    }

    async fn delete_preferences(
        &self,
        identity: &Identity,
        id: &str,
    ) -> Result<(), PreferencesError> {
        self.service
            .delete_preferences(identity, id)
            .await
            .map_err(Into::into)
    }
}
