use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api::ErrorResponse;
use contracts::shared::upload::FileValidationError;
use thiserror::Error;

/// Ошибка обработчика, отдаётся клиенту как `{"error": "..."}`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Travel request not found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// 500 с префиксом операции: "Error submitting report: ..."
    pub fn internal(operation: &str, cause: impl std::fmt::Display) -> Self {
        AppError::Internal(format!("Error {}: {}", operation, cause))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FileValidationError> for AppError {
    fn from(e: FileValidationError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
