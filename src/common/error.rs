// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::error;

use super::validation::ErrorMap;

/// Failure to interpret a client-supplied identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown field kind: {0}")]
    UnknownFieldKind(String),

    #[error("Unknown address type: {0}")]
    UnknownAddressType(String),
}

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    InternalServer(String),
    InvalidForm(ErrorMap),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::InvalidForm(errors) => {
                write!(f, "Invalid Form: {} field(s) failed validation", errors.len())
            }
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ErrorMap>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code, fields) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST", None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND", None),
            ApiError::InternalServer(msg) => {
                error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    msg,
                    "INTERNAL_SERVER_ERROR",
                    None,
                )
            }
            ApiError::InvalidForm(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "One or more fields are invalid".to_string(),
                "INVALID_FORM",
                Some(errors),
            ),
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
            fields,
        };

        (status, Json(error_response)).into_response()
    }
}

/// Converts a failed form pass into a 422 carrying every field error
impl From<ErrorMap> for ApiError {
    fn from(errors: ErrorMap) -> Self {
        if errors.is_valid() {
            ApiError::InternalServer("Form was valid but converted to error".to_string())
        } else {
            ApiError::InvalidForm(errors)
        }
    }
}

impl From<ParseError> for ApiError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::UnknownFieldKind(_) => ApiError::NotFound(e.to_string()),
            _ => ApiError::BadRequest(e.to_string()),
        }
    }
}
