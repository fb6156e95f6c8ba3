//! Error types for the schedule core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during schedule management.

use thiserror::Error;

/// The main error type for the schedule core.
///
/// All lifecycle operations and store calls return this error type, making
/// it easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::ScheduleError;
///
/// let error = ScheduleError::UserNotFound { id: 42 };
/// assert_eq!(error.to_string(), "User not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A request failed validation before any store call was made.
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The referenced user id does not exist.
    #[error("User not found: {id}")]
    UserNotFound {
        /// The user id that was not found.
        id: i64,
    },

    /// The referenced shift id does not exist.
    #[error("Shift not found: {id}")]
    ShiftNotFound {
        /// The shift id that was not found.
        id: i64,
    },

    /// The referenced leave id does not exist.
    #[error("Leave not found: {id}")]
    LeaveNotFound {
        /// The leave id that was not found.
        id: i64,
    },

    /// An underlying persistence call failed.
    #[error("Store operation '{operation}' failed: {message}")]
    Store {
        /// The store operation that failed.
        operation: String,
        /// A description of the failure.
        message: String,
    },

    /// A multi-step mutation was partially applied: an earlier write
    /// succeeded but a later paired write failed, leaving the balance and
    /// the entity records out of sync.
    #[error("Inconsistent state after '{operation}': {message}")]
    Inconsistent {
        /// The lifecycle operation that was interrupted.
        operation: String,
        /// Which write failed after which writes had already been applied.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ScheduleError {
    /// Creates a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a store error for a named operation.
    pub fn store(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Store {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Creates an inconsistent-state error for a named operation.
    pub fn inconsistent(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Inconsistent {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return ScheduleError.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
