//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when loading, validating, or mutating contacts.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Email, phone number, or name does not match its required format
    #[error("invalid {field}: {value}")]
    InvalidFormat { field: &'static str, value: String },

    /// Another contact already uses this email address
    #[error("duplicate email address: {0}")]
    DuplicateEmail(String),

    /// Another contact already uses this phone number
    #[error("duplicate phone number: {0}")]
    DuplicatePhone(String),

    /// Selection or key does not refer to a stored contact
    #[error("contact not found: {0}")]
    NotFound(String),

    /// A persisted row is missing required fields
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// Backing file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl StoreError {
    /// Whether the operator can correct this error by supplying different input.
    ///
    /// I/O and CSV encoding failures are fatal; everything else is reported and
    /// the prompt is re-issued.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, StoreError::Io(_) | StoreError::Csv(_))
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidEmail(value) => StoreError::InvalidFormat {
                field: "email address",
                value,
            },
            ValidationError::InvalidPhone(value) => StoreError::InvalidFormat {
                field: "phone number",
                value,
            },
            ValidationError::InvalidName(value) => StoreError::InvalidFormat {
                field: "name",
                value,
            },
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
