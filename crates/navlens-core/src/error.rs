//! Error types for the Navlens library.
//!
//! This module defines the error types used throughout Navlens,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Navlens operations.
pub type NavlensResult<T> = Result<T, NavlensError>;

/// The main error type for Navlens operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavlensError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A series violates an input contract.
    #[error("Invalid series '{name}': {reason}")]
    InvalidSeries {
        /// Name of the offending series.
        name: String,
        /// Description of what's invalid.
        reason: String,
    },
}

impl NavlensError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid series error.
    #[must_use]
    pub fn invalid_series(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSeries {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
