use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::error::DomainError;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// RFC 9457 Problem Details for HTTP APIs.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[must_use]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_url: String,
    pub title: String,
    #[serde(serialize_with = "serialize_status_code")]
    #[schema(value_type = u16)]
    pub status: StatusCode,
    pub detail: String,
    pub instance: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

impl Problem {
    pub fn new(status: StatusCode, code: &str, title: &str, detail: impl Into<String>) -> Self {
        Self {
            type_url: format!("https://errors.hyperspot.com/{code}"),
            title: title.to_owned(),
            status,
            detail: detail.into(),
            instance: String::new(),
            code: code.to_owned(),
            trace_id: None,
        }
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

/// Map domain error to RFC 9457 Problem.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::SchemaNotFound(schema) => {
            tracing::error!(error = %e, schema = %schema, "Preference schema is not registered");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "USER_PREFERENCES_SCHEMA_NOT_FOUND",
                "Internal Server Error",
                "Preference storage is not configured",
            )
        }
        DomainError::ClientAcquisition { user, .. } => {
            tracing::warn!(error = %e, "Preference client acquisition failed");
            Problem::new(
                StatusCode::FORBIDDEN,
                "USER_PREFERENCES_FORBIDDEN",
                "Forbidden",
                format!("Preferences of user '{user}' are not accessible"),
            )
        }
        DomainError::BackingWrite { key, op, .. } => {
            tracing::warn!(error = %e, "Preference write failed");
            Problem::new(
                StatusCode::CONFLICT,
                "USER_PREFERENCES_WRITE_FAILED",
                "Conflict",
                format!("Failed to {op} preference '{key}'"),
            )
        }
        DomainError::BackingList(_) | DomainError::BackingDelete(_) => {
            tracing::error!(error = %e, "Preference backing store error");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "USER_PREFERENCES_BACKING_STORE",
                "Internal Server Error",
                "An internal storage error occurred",
            )
        }
    };

    let problem = problem.with_instance(instance);
    match trace_id {
        Some(id) => problem.with_trace_id(id),
        None => problem,
    }
}
