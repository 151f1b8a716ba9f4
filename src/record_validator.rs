use std::fmt;
use std::fs;
use std::path::Path;
use log::debug;
use serde::Serialize;
use crate::errors::AppError;
use crate::file_utils::FileManager;

// @module: Fixed-width record validation

// @struct: Structural rules for one record file format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFormat {
    // @field: Required content length of every line, terminators excluded
    pub record_length: usize,

    // @field: Prefix the first line must carry
    pub start_marker: String,

    // @field: Prefix the last line must carry
    pub end_marker: String,
}

impl Default for RecordFormat {
    fn default() -> Self {
        // SDIF V3 interchange files: 160-character records, A0 file
        // header, Z0 file terminator.
        RecordFormat {
            record_length: 160,
            start_marker: "A0".to_string(),
            end_marker: "Z0".to_string(),
        }
    }
}

/// One failed structural check, tagged with what was observed and what the
/// format expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ViolationKind {
    /// Line content length differs from the record length
    LengthMismatch {
        observed: usize,
        expected: usize,
        content: String,
    },

    /// First line does not carry the start marker
    MissingStartMarker {
        expected: String,
        observed: String,
    },

    /// Last line does not carry the end marker
    MissingEndMarker {
        expected: String,
        observed: String,
    },
}

/// A single detected deviation, anchored to its 1-based line position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 1-based line position in the scanned input
    pub line: usize,

    /// Which check failed, with diagnostic detail
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ViolationKind::LengthMismatch { observed, expected, content } => {
                writeln!(f, "Error Line {}: Length is {}, expected {}.", self.line, observed, expected)?;
                write!(f, "'{}'", content)
            },
            ViolationKind::MissingStartMarker { expected, .. } => {
                write!(f, "Error Line {}: Must start with {}", self.line, expected)
            },
            ViolationKind::MissingEndMarker { expected, .. } => {
                write!(f, "Error Last Line: Must start with {}", expected)
            },
        }
    }
}

/// Outcome of one validation run: every violation in scan order plus the
/// scan dimensions needed to render a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Violations in the order the scan found them
    pub violations: Vec<Violation>,

    /// Number of lines the scan covered
    pub lines_scanned: usize,

    /// Record length that was enforced
    pub record_length: usize,
}

impl ValidationReport {
    /// A report passes exactly when no check failed.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Render the one-line verdict that closes a report.
    pub fn summary(&self) -> String {
        if self.passed() {
            format!("SUCCESS: All lines are exactly {} characters.", self.record_length)
        } else {
            format!("FAILED: Found {} errors.", self.violations.len())
        }
    }
}

// @struct: Line-length and marker verification over one text source
pub struct RecordValidator {
    format: RecordFormat,
}

impl RecordValidator {
    /// Create a validator enforcing the given format.
    pub fn new(format: RecordFormat) -> Self {
        RecordValidator { format }
    }

    /// The format this validator enforces.
    pub fn format(&self) -> &RecordFormat {
        &self.format
    }

    /// Validate a file on disk.
    ///
    /// A source that does not exist or cannot be read fails with
    /// `AppError::SourceUnavailable`; structural findings never produce an
    /// error, they land in the returned report.
    pub fn validate_file<P: AsRef<Path>>(&self, path: P) -> Result<ValidationReport, AppError> {
        let path = path.as_ref();

        if !FileManager::file_exists(path) {
            return Err(AppError::SourceUnavailable {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| AppError::SourceUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(self.validate_content(&content))
    }

    /// Validate in-memory text.
    ///
    /// Lines are separated by `\n` with one trailing `\r` stripped, so both
    /// CRLF and LF terminated files measure only their payload content. The
    /// scan never aborts: every line is checked and every finding recorded.
    pub fn validate_content(&self, content: &str) -> ValidationReport {
        let lines: Vec<&str> = content.lines().collect();
        let mut violations = Vec::new();

        let last_index = lines.len().saturating_sub(1);
        for (i, line) in lines.iter().enumerate() {
            self.check_line(line, i, last_index, &mut violations);
        }

        debug!("Scanned {} lines, {} violations", lines.len(), violations.len());

        ValidationReport {
            violations,
            lines_scanned: lines.len(),
            record_length: self.format.record_length,
        }
    }

    // @checks: One line against length and positional marker rules
    // Order matters for report ordering: length, then start marker, then
    // end marker. A single-line input is both first and last line, and the
    // two marker checks stay independent there.
    fn check_line(&self, content: &str, index: usize, last_index: usize, violations: &mut Vec<Violation>) {
        let position = index + 1;
        let observed = content.chars().count();

        if observed != self.format.record_length {
            violations.push(Violation {
                line: position,
                kind: ViolationKind::LengthMismatch {
                    observed,
                    expected: self.format.record_length,
                    content: content.to_string(),
                },
            });
        }

        if index == 0 && !content.starts_with(&self.format.start_marker) {
            violations.push(Violation {
                line: position,
                kind: ViolationKind::MissingStartMarker {
                    expected: self.format.start_marker.clone(),
                    observed: prefix_of(content, self.format.start_marker.chars().count()),
                },
            });
        }

        if index == last_index && !content.starts_with(&self.format.end_marker) {
            violations.push(Violation {
                line: position,
                kind: ViolationKind::MissingEndMarker {
                    expected: self.format.end_marker.clone(),
                    observed: prefix_of(content, self.format.end_marker.chars().count()),
                },
            });
        }
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        RecordValidator::new(RecordFormat::default())
    }
}

// @returns: The first `len` characters of a line, for marker diagnostics
fn prefix_of(content: &str, len: usize) -> String {
    content.chars().take(len).collect()
}
