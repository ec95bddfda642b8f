//! API error handling
//!
//! Every error body has the shape `{"message": ..., "reason": ...}`.
//! Client errors carry the specific reason; server errors log the detail
//! and return a generic body.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use domain_loan::LoanError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body did not parse or failed validation
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No application with the requested id
    #[error("Loan application not found: {0}")]
    NotFound(String),

    /// A query parameter did not parse or was out of range
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Query string could not be decoded at all
    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),

    /// Store or other infrastructure failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub reason: String,
}

impl ApiError {
    pub fn invalid_parameter(name: &'static str, reason: impl ToString) -> Self {
        ApiError::InvalidParameter {
            name,
            reason: reason.to_string(),
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::InvalidBody(reason) => ErrorResponse {
                message: "Invalid request body".to_string(),
                reason,
            },
            ApiError::NotFound(reason) => ErrorResponse {
                message: "Loan application not found".to_string(),
                reason,
            },
            ApiError::InvalidParameter { name, reason } => ErrorResponse {
                message: format!("Invalid parameter {}", name),
                reason,
            },
            ApiError::InvalidQuery(reason) => ErrorResponse {
                message: "Invalid query parameters".to_string(),
                reason,
            },
            ApiError::Internal(detail) => {
                error!(error = %detail, "Request failed with a server error");
                ErrorResponse {
                    message: "Internal server error".to_string(),
                    reason: "An unexpected error occurred".to_string(),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<LoanError> for ApiError {
    fn from(err: LoanError) -> Self {
        match err {
            LoanError::Validation(violation) => ApiError::InvalidBody(violation.to_string()),
            not_found @ LoanError::NotFound(_) => ApiError::NotFound(not_found.to_string()),
            LoanError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}
