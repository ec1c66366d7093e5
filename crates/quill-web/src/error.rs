use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use quill_core::error::CoreError;
use quill_storage::error::StorageError;

/// Error type for every route handler. Rendered as a JSON `{"error": ...}`
/// body; field validation failures also name the offending field.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// The request could not be read as a form at all.
    BadRequest(String),
    InvalidField { field: String, message: String },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, field) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => {
                tracing::debug!("unreadable request: {msg}");
                (StatusCode::BAD_REQUEST, msg, None)
            }
            ApiError::InvalidField { field, message } => {
                tracing::debug!(field = %field, "rejected submission: {message}");
                (StatusCode::BAD_REQUEST, message, Some(field))
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error, field })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::InvalidField {
            field: e.field().to_string(),
            message: e.to_string(),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<tera::Error> for ApiError {
    fn from(e: tera::Error) -> Self {
        ApiError::Internal(format!("template rendering failed: {e}"))
    }
}
