//! Error responses shared by the HTTP adapters.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Carries the domain error's own code, message and details.
    pub fn from_domain(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}

/// Status code for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    if code.is_validation() {
        StatusCode::BAD_REQUEST
    } else if code.is_not_found() {
        StatusCode::NOT_FOUND
    } else if code == ErrorCode::DuplicateRoutineItem {
        StatusCode::CONFLICT
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Maps a domain error to a response. Infrastructure failures are logged
/// and their message is replaced unless `verbose` is set.
pub fn domain_error_response(error: DomainError, verbose: bool) -> Response {
    let status = status_for(error.code());
    if status.is_server_error() {
        tracing::error!(code = %error.code(), error = %error.message(), "Request failed");
        if !verbose {
            let body = ErrorResponse {
                code: error.code().to_string(),
                message: "An unexpected error occurred".to_string(),
                details: None,
            };
            return (status, Json(body)).into_response();
        }
    }
    (status, Json(ErrorResponse::from_domain(&error))).into_response()
}
