/*!
 * Tests for the self-test sample fixture
 */

use anyhow::Result;
use sd3check::fixture;
use sd3check::record_validator::{RecordFormat, RecordValidator};
use crate::common;

/// Test that the sample carries the canonical record sequence at full width
#[test]
fn test_sample_lines_withDefaultFormat_shouldMatchRecordLength() {
    let format = RecordFormat::default();

    let lines = fixture::sample_lines(&format);

    assert_eq!(lines.len(), 4);
    for line in &lines {
        assert_eq!(line.chars().count(), 160);
    }
    assert!(lines[0].starts_with("A0"));
    assert!(lines[1].starts_with("B1"));
    assert!(lines[2].starts_with("D0"));
    assert!(lines[3].starts_with("Z0"));
}

/// Test that the written sample file is CRLF terminated throughout
#[test]
fn test_write_sample_file_shouldProduceCrlfTerminatedFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let format = RecordFormat::default();

    let path = fixture::write_sample_file(temp_dir.path(), &format)?;

    assert!(path.ends_with(fixture::SAMPLE_FILE_NAME));
    let raw = std::fs::read_to_string(&path)?;
    assert!(raw.ends_with("\r\n"));
    assert_eq!(raw.matches("\r\n").count(), 4);
    Ok(())
}

/// Test that the sample file validates clean under the default format
#[test]
fn test_write_sample_file_shouldValidateClean() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let validator = RecordValidator::default();

    let path = fixture::write_sample_file(temp_dir.path(), validator.format())?;
    let report = validator.validate_file(&path)?;

    assert!(report.passed());
    assert_eq!(report.lines_scanned, 4);
    Ok(())
}
