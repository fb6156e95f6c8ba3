//! Response types for the schedule core API.
//!
//! This module defines the error response structures, the delete-operation
//! response bodies and the mapping from core errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Leave, Shift, User};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Response body for `DELETE /shifts/{id}`.
///
/// `deleted` is false when the id did not exist; the operation is a no-op
/// in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDeleteResponse {
    /// Whether a shift was deleted.
    pub deleted: bool,
    /// The deleted shift, when one existed.
    pub shift: Option<Shift>,
    /// The owner after the balance adjustment, when a shift was deleted.
    pub user: Option<User>,
}

/// Response body for `DELETE /leaves/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDeleteResponse {
    /// Whether a leave record was deleted.
    pub deleted: bool,
    /// The deleted leave, when one existed.
    pub leave: Option<Leave>,
    /// The owner after the correction reversal, when a leave was deleted.
    pub user: Option<User>,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ScheduleError> for ApiErrorResponse {
    fn from(error: ScheduleError) -> Self {
        match error {
            ScheduleError::Validation { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Validation failed for '{}': {}", field, message),
                    "The request was rejected before any store call was made",
                ),
            },
            ScheduleError::UserNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("USER_NOT_FOUND", format!("User not found: {}", id)),
            },
            ScheduleError::ShiftNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SHIFT_NOT_FOUND", format!("Shift not found: {}", id)),
            },
            ScheduleError::LeaveNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("LEAVE_NOT_FOUND", format!("Leave not found: {}", id)),
            },
            ScheduleError::Store { operation, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    format!("Store operation '{}' failed", operation),
                    message,
                ),
            },
            ScheduleError::Inconsistent { operation, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INCONSISTENT_STATE",
                    format!("Operation '{}' was partially applied", operation),
                    message,
                ),
            },
            ScheduleError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            ScheduleError::ConfigParse { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}
