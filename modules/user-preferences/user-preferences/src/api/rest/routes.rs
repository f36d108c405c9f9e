use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use utoipa::OpenApi;

use crate::api::rest::dto::{UpdateUserPreferenceRequest, UserPreferenceDto, UserPreferenceListDto};
use crate::api::rest::error::Problem;
use crate::api::rest::handlers;
use crate::domain::service::Service;

pub const COLLECTION_PATH: &str = "/user-preferences/v1/userpreferences";
pub const ITEM_PATH: &str = "/user-preferences/v1/userpreferences/{id}";

/// OpenAPI description of the routes mounted by [`register_routes`].
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_preferences,
        handlers::get_preferences,
        handlers::update_preferences,
        handlers::delete_preferences,
    ),
    components(schemas(
        UserPreferenceDto,
        UserPreferenceListDto,
        UpdateUserPreferenceRequest,
        Problem,
    )),
    tags((name = "user-preferences", description = "Per-user preference objects"))
)]
pub struct UserPreferencesApiDoc;

/// Mounts the preference routes on `router`.
///
/// Handlers expect an `Identity` request extension installed by the
/// authentication layer in front of this router.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(COLLECTION_PATH, get(handlers::list_preferences))
        .route(
            ITEM_PATH,
            get(handlers::get_preferences)
                .put(handlers::update_preferences)
                .delete(handlers::delete_preferences),
        )
        .layer(Extension(service))
}
