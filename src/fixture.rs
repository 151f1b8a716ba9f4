/*!
 * Built-in sample fixture for the self-test mode.
 *
 * When the CLI runs without an input path it synthesizes a minimal valid
 * SD3 file and validates that, so the checker can be exercised without any
 * external fixtures. The sample carries the canonical record sequence of a
 * file header (A0), a meet header (B1), an individual result (D0) and the
 * file terminator (Z0), each padded to the full record length.
 */

use std::path::{Path, PathBuf};
use anyhow::Result;
use crate::file_utils::FileManager;
use crate::record_validator::RecordFormat;

/// Name of the synthesized self-test file
pub const SAMPLE_FILE_NAME: &str = "test_verify.sd3";

/// Record prefixes used by the sample, in line order
const SAMPLE_PREFIXES: [&str; 4] = ["A0", "B1", "D0", "Z0"];

/// Build the sample records for a format: each prefix right-padded with
/// spaces to the record length.
pub fn sample_lines(format: &RecordFormat) -> Vec<String> {
    SAMPLE_PREFIXES
        .iter()
        .map(|prefix| pad_record(prefix, format.record_length))
        .collect()
}

/// Write the sample file, CRLF terminated, into `dir`.
pub fn write_sample_file(dir: &Path, format: &RecordFormat) -> Result<PathBuf> {
    let path = dir.join(SAMPLE_FILE_NAME);

    let mut content = sample_lines(format).join("\r\n");
    content.push_str("\r\n");

    FileManager::write_to_file(&path, &content)?;
    Ok(path)
}

// @returns: Prefix padded with spaces to exactly `length` characters
fn pad_record(prefix: &str, length: usize) -> String {
    format!("{:<width$}", prefix, width = length)
}
