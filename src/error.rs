//! Error types for the production report engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! validating report input, or talking to the target store.

use thiserror::Error;

/// The main error type for the production report engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Note that
/// the metric calculations themselves never fail: parse failures and division
/// hazards degrade to zero rather than surfacing as errors.
///
/// # Example
///
/// ```
/// use report_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Department id was not found in the configured roster.
    #[error("Department not found: {id}")]
    DepartmentNotFound {
        /// The department id that was not found.
        id: String,
    },

    /// A production item was invalid or contained inconsistent data.
    #[error("Invalid item '{id}': {message}")]
    InvalidItem {
        /// The id of the invalid item.
        id: String,
        /// A description of what made the item invalid.
        message: String,
    },

    /// A report date was rejected at the API boundary.
    #[error("Invalid report date: {message}")]
    InvalidDate {
        /// A description of why the date was rejected.
        message: String,
    },

    /// The target store failed to read or write an override table.
    #[error("Target store error: {message}")]
    StoreError {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
