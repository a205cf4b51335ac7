//! Error handling utilities for the vesper application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors in journal entry logic.
///
/// # Examples
///
/// ```
/// use vesper::errors::JournalError;
///
/// let error = JournalError::InvalidEntry {
///     reason: "content is empty".to_string(),
/// };
///
/// assert!(format!("{}", error).contains("Invalid entry"));
/// assert!(format!("{}", error).contains("content is empty"));
/// ```
#[derive(Debug, Error)]
pub enum JournalError {
    /// Error when an entry is submitted without the fields it needs to be persisted.
    ///
    /// The presentation layer is expected to prevent this (disable submit while
    /// content or mood is missing), but the core validates defensively so a
    /// corrupt entry is never written to the store.
    #[error("Invalid entry: {reason}. An entry needs non-empty content and a mood before it can be saved.")]
    InvalidEntry {
        /// Which precondition the submitted entry violated
        reason: String,
    },
}

/// Represents errors that can occur when persisting journal state.
///
/// Read-side store failures (missing file, malformed payload) are not errors:
/// they degrade to empty/zero defaults at the call site. Only the write path
/// surfaces errors, since a failed write means the user's entry was not saved.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error when the store file cannot be written.
    #[error("Failed to write journal data to {path}: {source}. Please check file permissions and available disk space.")]
    WriteFailed {
        /// The path to the store file that couldn't be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when journal state cannot be serialized for persistence.
    #[error("Failed to serialize journal data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Represents errors from the external voice-capture capability.
///
/// These are caught at the recording boundary and degrade to "recording
/// unavailable" rather than propagating into the journal core.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Error when the capture device cannot be acquired (permission denied,
    /// no device, etc.).
    #[error("Voice recording is unavailable: {reason}")]
    Unavailable {
        /// Why the capture device could not be acquired
        reason: String,
    },

    /// Error when stopping a capture that does not match an active session.
    #[error("No recording in progress for the given handle")]
    NotRecording,
}

/// Represents all possible errors that can occur in the vesper application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use vesper::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use vesper::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal entry logic (e.g., invalid submissions).
    ///
    /// This variant uses a dedicated JournalError type to provide detailed
    /// information about what was wrong with the journal operation.
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    /// Errors when persisting journal state.
    ///
    /// This variant uses a dedicated StoreError type to provide detailed
    /// information about what went wrong with the key-value store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors from the voice-capture boundary.
    ///
    /// This variant uses a dedicated CaptureError type to provide detailed
    /// information about what went wrong with the recording capability.
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use vesper::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     // Operation that could fail
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
