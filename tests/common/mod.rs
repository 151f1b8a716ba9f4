/*!
 * Common test utilities for the sd3check test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A record line: the prefix right-padded with spaces to 160 characters
pub fn record_line(prefix: &str) -> String {
    record_line_with_length(prefix, 160)
}

/// A record line padded to an arbitrary length
pub fn record_line_with_length(prefix: &str, length: usize) -> String {
    format!("{:<width$}", prefix, width = length)
}

/// A minimal valid SD3 body: A0 header, B1 meet header, D0 result, Z0
/// terminator, CRLF terminated
pub fn valid_sd3_content() -> String {
    let mut content = [
        record_line("A0"),
        record_line("B1"),
        record_line("D0"),
        record_line("Z0"),
    ]
    .join("\r\n");
    content.push_str("\r\n");
    content
}
