/*!
 * End-to-end validation workflow tests: files on disk through the
 * validator to a rendered verdict.
 */

use anyhow::Result;
use sd3check::file_utils::FileManager;
use sd3check::fixture;
use sd3check::record_validator::{RecordValidator, ViolationKind};
use crate::common;

/// Test the happy path: a well-formed file on disk passes end to end
#[test]
fn test_workflow_withValidFile_shouldPass() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "meet.sd3", &common::valid_sd3_content())?;
    let validator = RecordValidator::default();

    let report = validator.validate_file(&file)?;

    assert!(report.passed());
    assert_eq!(report.summary(), "SUCCESS: All lines are exactly 160 characters.");
    Ok(())
}

/// Test that one pass over a broken file surfaces every problem at once
#[test]
fn test_workflow_withCorruptedFile_shouldCollectAllViolations() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    // Wrong header, a truncated record, and a missing terminator
    let content = [
        common::record_line("X9"),
        common::record_line_with_length("B1", 45),
        common::record_line("D0"),
    ]
    .join("\r\n");
    let file = common::create_test_file(temp_dir.path(), "broken.sd3", &content)?;
    let validator = RecordValidator::default();

    let report = validator.validate_file(&file)?;

    assert!(!report.passed());
    assert_eq!(report.violations.len(), 3);
    assert!(matches!(report.violations[0].kind, ViolationKind::MissingStartMarker { .. }));
    assert_eq!(report.violations[0].line, 1);
    assert!(matches!(report.violations[1].kind, ViolationKind::LengthMismatch { observed: 45, .. }));
    assert_eq!(report.violations[1].line, 2);
    assert!(matches!(report.violations[2].kind, ViolationKind::MissingEndMarker { .. }));
    assert_eq!(report.violations[2].line, 3);
    assert_eq!(report.summary(), "FAILED: Found 3 errors.");
    Ok(())
}

/// Test the directory flow: discover every .sd3 file and validate each
#[test]
fn test_workflow_withDirectory_shouldValidateEachDiscoveredFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a_good.sd3", &common::valid_sd3_content())?;
    common::create_test_file(temp_dir.path(), "b_bad.sd3", &common::record_line("B1"))?;
    common::create_test_file(temp_dir.path(), "ignored.txt", "not a record file")?;
    let validator = RecordValidator::default();

    let files = FileManager::find_sd3_files(temp_dir.path())?;
    assert_eq!(files.len(), 2);

    let reports: Vec<_> = files
        .iter()
        .map(|f| validator.validate_file(f))
        .collect::<Result<_, _>>()?;

    // Sorted discovery keeps the verdicts aligned with the file names
    assert!(reports[0].passed());
    assert!(!reports[1].passed());
    assert_eq!(reports[1].violations.len(), 2);
    Ok(())
}

/// Test the self-test flow: synthesize the sample and validate it clean
#[test]
fn test_workflow_withSelfTestFixture_shouldPass() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let validator = RecordValidator::default();

    let path = fixture::write_sample_file(temp_dir.path(), validator.format())?;
    let report = validator.validate_file(&path)?;

    assert!(report.passed());
    assert_eq!(report.violations.len(), 0);
    Ok(())
}

/// Test that the fatal tier and the data tier stay separate: a missing
/// file is an error, a malformed file is a report
#[test]
fn test_workflow_withMissingAndMalformedInputs_shouldSeparateErrorTiers() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let validator = RecordValidator::default();

    let missing = validator.validate_file(temp_dir.path().join("never_written.sd3"));
    assert!(missing.is_err());

    let malformed =
        common::create_test_file(temp_dir.path(), "malformed.sd3", "too short to be a record")?;
    let report = validator.validate_file(&malformed)?;
    assert!(!report.passed());
    Ok(())
}
