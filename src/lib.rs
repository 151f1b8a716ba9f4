/*!
 * # sd3check - SD3 fixed-width record file checker
 *
 * A Rust library and CLI for validating SDIF V3 (SD3) interchange files
 * before they are consumed downstream.
 *
 * ## Features
 *
 * - Verify that every record line is exactly 160 characters, with CRLF or
 *   LF terminators stripped before measuring
 * - Verify the A0 file-header marker on the first line and the Z0
 *   file-terminator marker on the last line
 * - Accumulate every violation into one ordered report instead of stopping
 *   at the first problem
 * - Validate a single file or every `.sd3` file under a directory
 * - Built-in self-test mode that synthesizes a sample file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `record_validator`: Core line-length and marker verification
 * - `file_utils`: File system operations
 * - `fixture`: Sample file synthesis for the self-test mode
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod errors;
pub mod file_utils;
pub mod fixture;
pub mod record_validator;

// Re-export main types for easier usage
pub use errors::AppError;
pub use record_validator::{RecordFormat, RecordValidator, ValidationReport, Violation, ViolationKind};
