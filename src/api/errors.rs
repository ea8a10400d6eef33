//! Error handling for the REST API
//!
//! Every failure is rendered as `{code, message, timestamp}` with a status code
//! derived from the error kind. Nothing here is fatal to the server; the front
//! end shows the message as a transient notice.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::MailroomError;

/// Standardized error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal server error: {message}")]
    InternalError { message: String },
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::ValidationFailed { .. } => "VALIDATION_FAILED",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Conflict { .. } => "INVALID_TRANSITION",
            ApiError::InternalError { .. } => "INTERNAL_ERROR",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::ValidationFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            error!("API error: {:?}", self);
        } else {
            warn!("API error: {}", self);
        }

        HttpResponse::build(status_code).json(ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            timestamp: chrono::Utc::now(),
        })
    }
}

impl From<MailroomError> for ApiError {
    fn from(err: MailroomError) -> Self {
        match err {
            MailroomError::Validation(message) => ApiError::ValidationFailed { message },
            MailroomError::InvalidTransition { .. } => ApiError::Conflict { message: err.to_string() },
            MailroomError::NotFound(resource) => ApiError::NotFound { resource },
            MailroomError::SeedIo(_) | MailroomError::SeedFormat(_) => ApiError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::BadRequest {
            message: errors.to_string(),
        }
    }
}
