use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movies_core::error::CoreError;
use serde_json::json;

/// Body message for any unknown movie id.
pub const MOVIE_NOT_FOUND_MESSAGE: &str = "Pelicula no encontrada";

/// Plain-text body returned to blocked cross-origin requests.
pub const ORIGIN_BLOCKED_MESSAGE: &str = "Not allowed by CORS";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so handlers can return it directly.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `movies_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request that could not be read (malformed JSON, wrong content type).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, %id, "Lookup missed");
                (
                    StatusCode::NOT_FOUND,
                    axum::Json(json!({ "message": MOVIE_NOT_FOUND_MESSAGE })),
                )
                    .into_response()
            }
            AppError::Core(CoreError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "error": errors })),
            )
                .into_response(),
            // No JSON and no access-control headers: the browser treats this
            // as a CORS failure.
            AppError::Core(CoreError::OriginNotAllowed(_)) => {
                (StatusCode::FORBIDDEN, ORIGIN_BLOCKED_MESSAGE).into_response()
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "error": msg, "code": "BAD_REQUEST" })),
            )
                .into_response(),
            AppError::Core(CoreError::Internal(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({
                        "error": "An internal error occurred",
                        "code": "INTERNAL_ERROR",
                    })),
                )
                    .into_response()
            }
        }
    }
}
