//! Error type definitions.
//!
//! This module defines the error enums used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Validation errors for country-code input.
///
/// `validate_codes` collects every error it encounters instead of stopping
/// at the first one, so callers get full diagnostics for a bad list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Normalized input is not exactly two characters long.
    #[error("country code must be 2 characters, got {length} ({raw:?})")]
    InvalidLength {
        /// Length of the normalized input
        length: usize,
        /// The raw input as received
        raw: String,
    },

    /// Normalized input is not in the ISO 3166-1 alpha-2 registry.
    #[error("unknown ISO 3166-1 alpha-2 code: {code:?}")]
    UnknownCode {
        /// The normalized (trimmed, uppercased) code
        code: String,
    },

    /// The same code (after normalization) appeared more than once.
    #[error("duplicate country code {code:?} at index {index}")]
    Duplicate {
        /// The normalized duplicate code
        code: String,
        /// Zero-based index of the duplicate occurrence
        index: usize,
    },

    /// The list exceeds the configured maximum length.
    #[error("too many country codes: {count} exceeds maximum of {max}")]
    TooMany {
        /// Number of codes supplied
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// The list was empty and empty input was not allowed.
    #[error("country code list is empty")]
    EmptyInput,

    /// Input was not a string (dynamic JSON entry points only).
    #[error("expected a country code string, got {found}")]
    NotAString {
        /// JSON type name of the offending value
        found: &'static str,
    },
}
