use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use perfdash_core::CoreError;
use perfdash_db::DbError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`DbError`] plus request-body validation failures.
/// Implements [`IntoResponse`] to produce `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] DbError),

    /// Request body failed declarative validation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Db(db) => classify_db_error(db),
            AppError::InvalidInput(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                errors.to_string(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::MissingField { .. } => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
        }
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::InvalidWidgetType(tag) => (
            StatusCode::BAD_REQUEST,
            "INVALID_WIDGET_TYPE",
            format!("Invalid widget type: {tag}"),
        ),
        // Stored data that no longer maps onto the domain is a server fault.
        CoreError::MalformedKey { .. } | CoreError::MalformedItem(_) | CoreError::Internal(_) => {
            internal(err)
        }
    }
}

fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    match err {
        DbError::Core(core) => classify_core_error(core),
        DbError::Sqlx(sqlx::Error::RowNotFound) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => internal(other),
    }
}

/// Log the real cause and return a sanitized 500.
fn internal(err: &dyn std::fmt::Display) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
