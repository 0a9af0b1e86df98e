use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

use crate::repositories::RepositoryError;
use crate::utils::response::message;
use crate::utils::validation::ValidationErrors;

pub const VALIDATION_FAILED: &str = "missing or incorrect data";
pub const EVENT_NOT_FOUND: &str = "event not found";
pub const CREATE_FAILED: &str = "error creating event";
pub const INTERNAL_ERROR: &str = "internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// `public_message` is what the client sees; `source` only reaches the logs.
    #[error("Storage error: {source}")]
    StorageError {
        public_message: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl AppError {
    pub fn storage(public_message: &'static str, source: RepositoryError) -> Self {
        AppError::StorageError {
            public_message,
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => VALIDATION_FAILED,
            AppError::NotFound(_) => EVENT_NOT_FOUND,
            AppError::StorageError { public_message, .. } => *public_message,
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(errors) => {
                debug!(fields = %errors, "Rejected event payload");
            }
            AppError::NotFound(id) => {
                debug!(id = %id, "Event not found");
            }
            AppError::StorageError { source, .. } => {
                error!(error = ?source, "Storage error");
            }
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(source: RepositoryError) -> Self {
        AppError::storage(INTERNAL_ERROR, source)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        message(self.public_message(), self.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_and_messages() {
        let validation = AppError::from(ValidationErrors::default());
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.public_message(), "missing or incorrect data");

        let missing = AppError::NotFound("42".into());
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.public_message(), "event not found");

        let create = AppError::storage(
            CREATE_FAILED,
            RepositoryError::Database(sqlx::Error::PoolTimedOut),
        );
        assert_eq!(create.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(create.public_message(), "error creating event");
    }

    #[test]
    fn test_repository_errors_hide_details() {
        let err: AppError = RepositoryError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.public_message(), INTERNAL_ERROR);
        assert!(err.to_string().contains("timed out"));
    }
}
