/*!
 * Error types for the sd3check application.
 *
 * This module contains custom error types for the operational failure
 * paths, using the thiserror crate for ergonomic error definitions.
 * Structural findings in a scanned file are not errors; they travel in
 * the `ValidationReport` and never surface here.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The input source does not exist or cannot be opened for reading.
    /// No partial report is produced on this path.
    #[error("File not found: {path:?}")]
    SourceUnavailable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Error from a file operation other than opening the input source
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
