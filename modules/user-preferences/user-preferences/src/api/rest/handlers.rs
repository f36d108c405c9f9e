use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, OriginalUri, Path};
use axum::http::StatusCode;
use user_preferences_sdk::Identity;

use crate::domain::service::Service;

use super::dto::{UpdateUserPreferenceRequest, UserPreferenceDto, UserPreferenceListDto};
use super::error::{Problem, domain_error_to_problem};

pub type ApiResult<T> = Result<T, Problem>;

#[utoipa::path(
    get,
    path = "/user-preferences/v1/userpreferences",
    tag = "user-preferences",
    responses(
        (status = 200, description = "The caller's preferences", body = UserPreferenceListDto),
        (status = 403, description = "Preferences not accessible", body = Problem),
        (status = 500, description = "Storage failure", body = Problem),
    )
)]
pub async fn list_preferences(
    Extension(identity): Extension<Identity>,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Json<UserPreferenceListDto>> {
    let list = svc
        .list_preferences(&identity)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(list.into()))
}

/// The path id is ignored: callers only ever see their own preferences.
#[utoipa::path(
    get,
    path = "/user-preferences/v1/userpreferences/{id}",
    tag = "user-preferences",
    params(("id" = String, Path, description = "Preference object id")),
    responses(
        (status = 200, description = "The caller's preferences", body = UserPreferenceDto),
        (status = 403, description = "Preferences not accessible", body = Problem),
        (status = 500, description = "Storage failure", body = Problem),
    )
)]
pub async fn get_preferences(
    Extension(identity): Extension<Identity>,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(_id): Path<String>,
) -> ApiResult<Json<UserPreferenceDto>> {
    let preference = svc
        .get_preferences(&identity)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(preference.into()))
}

#[utoipa::path(
    put,
    path = "/user-preferences/v1/userpreferences/{id}",
    tag = "user-preferences",
    params(("id" = String, Path, description = "Preference object id")),
    request_body = UpdateUserPreferenceRequest,
    responses(
        (status = 200, description = "Stored preferences", body = UserPreferenceDto),
        (status = 403, description = "Preferences not accessible", body = Problem),
        (status = 409, description = "A preference write failed", body = Problem),
        (status = 500, description = "Storage failure", body = Problem),
    )
)]
pub async fn update_preferences(
    Extension(identity): Extension<Identity>,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(_id): Path<String>,
    Json(req): Json<UpdateUserPreferenceRequest>,
) -> ApiResult<Json<UserPreferenceDto>> {
    let preference = svc
        .update_preferences(&identity, req.into_desired())
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(preference.into()))
}

#[utoipa::path(
    delete,
    path = "/user-preferences/v1/userpreferences/{id}",
    tag = "user-preferences",
    params(("id" = String, Path, description = "Accepted and ignored")),
    responses(
        (status = 204, description = "All preferences of the caller removed"),
        (status = 403, description = "Preferences not accessible", body = Problem),
        (status = 500, description = "Storage failure", body = Problem),
    )
)]
pub async fn delete_preferences(
    Extension(identity): Extension<Identity>,
    Extension(svc): Extension<Arc<Service>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    svc.delete_preferences(&identity, &id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(StatusCode::NO_CONTENT)
}
