//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Single-message validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        AppError::Validation(vec![msg.into()])
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                violations.join("; "),
                Some(serde_json::json!(violations)),
            ),
            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("not found: {what}"),
                None,
            ),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict", self.to_string(), None),
            AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, "bad_request", self.to_string(), None)
            }
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    (StatusCode::NOT_FOUND, "not_found", "not found".to_string(), None)
                } else {
                    // Opaque 500: log the real failure, never send it to the client.
                    tracing::error!(error = %e, "database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "database_error",
                        "internal server error".to_string(),
                        None,
                    )
                }
            }
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::Validation(vec![
            "isbn is required".into(),
            "pages must be an integer".into(),
        ]);
        assert_eq!(StatusCode::BAD_REQUEST, err.into_response().status());
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("book 123".into()).into_response();
        assert_eq!(StatusCode::NOT_FOUND, response.status());
    }

    #[test]
    fn conflict_maps_to_409() {
        let response = AppError::Conflict("isbn 1234567890 already exists".into()).into_response();
        assert_eq!(StatusCode::CONFLICT, response.status());
    }

    #[test]
    fn unexpected_db_error_maps_to_500() {
        let response = AppError::Db(sqlx::Error::PoolClosed).into_response();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, response.status());
    }
}
