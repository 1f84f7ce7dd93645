//! Error types for Warehouse Desk

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::receiving::ReceivingError;

/// Numeric error codes returned to the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchData = 2,
    BadValue = 3,
    Duplicate = 4,
    MissingDrNumber = 10,
    MissingDrDate = 11,
    NoPoSelected = 12,
    IncompleteItems = 13,
    NetworkOrServerError = 20,
}

impl From<&ReceivingError> for ErrorCode {
    fn from(e: &ReceivingError) -> Self {
        match e {
            ReceivingError::MissingDrNumber => ErrorCode::MissingDrNumber,
            ReceivingError::MissingDrDate => ErrorCode::MissingDrDate,
            ReceivingError::NoPoSelected => ErrorCode::NoPoSelected,
            ReceivingError::IncompleteItems(_) => ErrorCode::IncompleteItems,
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{0}")]
    Receiving(#[from] ReceivingError),

    /// Transport failure or a `success: false` reply from the warehouse API
    #[error("Warehouse API error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Upstream("The warehouse API did not respond in time".to_string())
        } else if e.is_decode() {
            AppError::Upstream(format!("Unexpected response from the warehouse API: {}", e))
        } else {
            AppError::Upstream(format!("Could not reach the warehouse API: {}", e))
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorCode::Duplicate, msg.clone()),
            AppError::Receiving(e) => (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::from(e), e.to_string()),
            AppError::Upstream(msg) => {
                tracing::warn!("Warehouse API error: {}", msg);
                (StatusCode::BAD_GATEWAY, ErrorCode::NetworkOrServerError, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receiving_errors_are_unprocessable() {
        let response = AppError::from(ReceivingError::IncompleteItems(3)).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_upstream_errors_are_bad_gateway() {
        let response = AppError::Upstream("down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_receiving_error_codes() {
        assert_eq!(ErrorCode::from(&ReceivingError::NoPoSelected) as u32, 12);
        assert_eq!(ErrorCode::from(&ReceivingError::IncompleteItems(1)) as u32, 13);
    }

    #[test]
    fn test_conflicts_report_duplicate() {
        let response = AppError::Conflict("already submitting".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::Duplicate as u32, 4);
    }
}
