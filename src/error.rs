//! Error types for the hour engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving periods,
//! aggregating hours, and serving the API.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the hour engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hour_engine::error::EngineError;
///
/// let error = EngineError::validation("hours", "must be positive");
/// assert_eq!(error.to_string(), "Invalid hours: must be positive");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No closure configuration has been saved yet.
    ///
    /// Period resolution, balances, and projections are all derived from the
    /// configured closure days, so nothing can be computed without one.
    #[error("No active closure configuration")]
    ConfigAbsent,

    /// A request field failed validation.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No hour entry exists with the given id.
    #[error("Hour entry not found: {id}")]
    EntryNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// No hour adjustment exists with the given id.
    #[error("Hour adjustment not found: {id}")]
    AdjustmentNotFound {
        /// The id that was looked up.
        id: Uuid,
    },
}

impl EngineError {
    /// Builds a [`EngineError::Validation`] from any string-like parts.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
