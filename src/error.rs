//! Request-level error taxonomy and its HTTP mapping.
//!
//! Every error is terminal for the request and is rendered as
//! `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;
use crate::utils::code_generator::CodeGenerationError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed payload or long URL.
    #[error("{0}")]
    InvalidInput(String),

    /// The generated code is already taken.
    #[error("Code in use: {0}")]
    CodeInUse(String),

    #[error("No URL with code: {0}")]
    NotFound(String),

    #[error("Storage failure: {0}")]
    StorageFailure(#[source] StoreError),

    #[error("Code generation failed: {0}")]
    GenerationFailure(#[from] CodeGenerationError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::CodeInUse(_) | AppError::NotFound(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::StorageFailure(_) | AppError::GenerationFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// A store conflict means another request won the race for the code.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(code) => AppError::CodeInUse(code),
            other => AppError::StorageFailure(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidInput(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
