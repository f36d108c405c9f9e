use std::sync::Arc;

use axum::Router;
use tracing::info;
use user_preferences_sdk::UserPreferencesClientV1;
use utoipa::OpenApi as _;

use crate::api::rest::routes::{self, UserPreferencesApiDoc};
use crate::config::UserPreferencesConfig;
use crate::domain::local_client::LocalClient;
use crate::domain::ports::{ResourceClientFactory, SchemaLookup};
use crate::domain::service::Service;

/// Assembles the user-preferences service from its configuration and the
/// collaborators provided by the host.
pub struct UserPreferencesModule {
    service: Arc<Service>,
}

impl UserPreferencesModule {
    #[must_use]
    pub fn new(
        config: &UserPreferencesConfig,
        schemas: Arc<dyn SchemaLookup>,
        clients: Arc<dyn ResourceClientFactory>,
    ) -> Self {
        info!(schema = %config.schema, "Initializing user-preferences module");
        let service = Service::new(schemas, clients, config.to_service_config());
        Self {
            service: Arc::new(service),
        }
    }

    /// In-process API client for other modules.
    #[must_use]
    pub fn client(&self) -> Arc<dyn UserPreferencesClientV1> {
        Arc::new(LocalClient::new(Arc::clone(&self.service)))
    }

    /// Registers the REST routes on `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering user-preferences REST routes");
        routes::register_routes(router, Arc::clone(&self.service))
    }

    /// OpenAPI document for the routes added by [`Self::register_rest`].
    #[must_use]
    pub fn openapi() -> utoipa::openapi::OpenApi {
        UserPreferencesApiDoc::openapi()
    }
}
