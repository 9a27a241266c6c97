use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidInput(String),
    #[error("No fields to update")]
    NoFieldsToUpdate,
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Could not execute the transaction")]
    TransactionError(#[source] sqlx::Error),
    #[error("An error occurred while running a database operation")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("Missing or invalid access token")]
    UnauthenticatedError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidInput(_)
            | AppError::NoFieldsToUpdate => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConversionEntityError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
        }
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}

// Malformed bodies, query strings and path segments are input errors like any other.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_their_status() {
        assert_eq!(
            AppError::NoFieldsToUpdate.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::EntityNotFound("Booking not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("Email already registered".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::UnauthenticatedError.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn database_failures_are_internal() {
        let err = AppError::SpecificOperationError(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn error_body_carries_the_message() {
        let response = AppError::EntityNotFound("User not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "User not found");
    }
}
