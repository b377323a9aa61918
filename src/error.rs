//! Error types for the camp staffing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the staffing workflow.

use thiserror::Error;
use uuid::Uuid;

use crate::models::InterestStatus;

/// The main error type for the camp staffing engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use camp_staffing::error::StaffingError;
///
/// let error = StaffingError::Validation {
///     field: "paid_days".to_string(),
///     message: "must be a multiple of 0.5".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid value for 'paid_days': must be a multiple of 0.5"
/// );
/// ```
#[derive(Debug, Error)]
pub enum StaffingError {
    /// A field on an incoming record failed validation.
    #[error("Invalid value for '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A workflow transition was attempted from a state that does not allow it.
    #[error("Interest is '{status}': cannot {attempted}")]
    InvalidTransition {
        /// The current status of the interest record.
        status: InterestStatus,
        /// The transition that was attempted.
        attempted: String,
    },

    /// A monitor tried to act on an interest record owned by someone else.
    #[error("Monitor {monitor} does not own interest {interest}")]
    NotInterestOwner {
        /// The interest record being acted on.
        interest: Uuid,
        /// The monitor who attempted the action.
        monitor: Uuid,
    },

    /// The acting account is not allowed to perform the operation.
    #[error("Account {account} is not allowed to {action}")]
    NotPermitted {
        /// The account that attempted the action.
        account: Uuid,
        /// The action that was refused.
        action: String,
    },

    /// A record that must be unique already exists.
    ///
    /// Duplicate interest and assignment creation is resolved internally by
    /// the store's get-or-create fallback; this variant only surfaces where
    /// no such fallback applies (e.g. allowance-class names).
    #[error("Conflict: {message}")]
    Conflict {
        /// A description of the conflicting record.
        message: String,
    },

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity that was looked up.
        entity: &'static str,
        /// The identifier that was not found.
        id: Uuid,
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

/// A type alias for Results that return StaffingError.
pub type StaffingResult<T> = Result<T, StaffingError>;
