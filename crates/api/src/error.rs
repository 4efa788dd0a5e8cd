//! HTTP error mapping.
//!
//! Validation failures round-trip to the submitting caller as structured
//! field errors and are never logged as faults; collaborator and internal
//! failures are logged here, at the boundary.

use agendahub_domain::AgendaError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// Wrapper turning a domain error into an HTTP response
#[derive(Debug)]
pub struct ApiError(pub AgendaError);

impl From<AgendaError> for ApiError {
    fn from(err: AgendaError) -> Self {
        Self(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AgendaError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AgendaError::Auth(_) => StatusCode::UNAUTHORIZED,
            AgendaError::NotFound(_) => StatusCode::NOT_FOUND,
            AgendaError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AgendaError::Network(_) => StatusCode::BAD_GATEWAY,
            AgendaError::Config(_) | AgendaError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }

        let body = match &self.0 {
            AgendaError::Validation(fields) => json!({ "error": "validation", "fields": fields }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
