// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{error, warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::record_validator::{RecordFormat, RecordValidator, ValidationReport};

mod errors;
mod file_utils;
mod fixture;
mod record_validator;

/// CLI Wrapper for the report output format
#[derive(Debug, Clone, ValueEnum)]
enum CliReportFormat {
    Text,
    Json,
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate SD3 fixed-width record files (default command)
    #[command(alias = "verify")]
    Check(CheckArgs),

    /// Generate shell completions for sd3check
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input .sd3 file or directory to validate; omit to run the built-in self-test
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Report output format
    #[arg(short, long, value_enum, default_value = "text")]
    report_format: CliReportFormat,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// sd3check - SD3 fixed-width record file checker
///
/// Validates SDIF V3 interchange files before they are consumed downstream:
/// every record line must be exactly 160 characters (line terminators
/// excluded), the first line must carry the A0 file-header marker and the
/// last line the Z0 file-terminator marker.
#[derive(Parser, Debug)]
#[command(name = "sd3check")]
#[command(version = "0.1.0")]
#[command(about = "Fixed-width SD3 record file checker")]
#[command(long_about = "sd3check verifies fixed-width SD3 meet files before they are consumed downstream.

EXAMPLES:
    sd3check results.sd3                    # Validate a single file
    sd3check /exports/                      # Validate every .sd3 file under a directory
    sd3check                                # Run the built-in self-test
    sd3check -r json results.sd3            # Emit the report as JSON
    sd3check --log-level debug results.sd3  # Validate with debug logging
    sd3check completions bash > sd3check.bash

EXIT CODES:
    0    every checked file passed
    1    structural violations were found
    2    the input source could not be read")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input .sd3 file or directory to validate; omit to run the built-in self-test
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Report output format
    #[arg(short, long, value_enum, default_value = "text")]
    report_format: CliReportFormat,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:5} {}\x1B[0m",
                color, now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // The level is updated later if the command line overrides it
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "sd3check", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Check(args)) => run_check(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let check_args = CheckArgs {
                input_path: cli.input_path,
                report_format: cli.report_format,
                log_level: cli.log_level,
            };
            run_check(check_args)
        }
    }
}

fn run_check(options: CheckArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(cmd_log_level.clone().into());
    }

    // The CLI always enforces the SD3 constants; other formats are a
    // library-level concern.
    let validator = RecordValidator::new(RecordFormat::default());

    let exit_code = match &options.input_path {
        None => run_self_test(&validator, &options.report_format)?,
        Some(path) if FileManager::dir_exists(path) => {
            run_directory(&validator, path, &options.report_format)?
        }
        Some(path) => validate_one(&validator, path, &options.report_format, false)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

/// Validate a single file and render its report.
///
/// Returns the process exit code for this file: 0 on a clean pass, 1 when
/// violations were found, 2 when the source could not be read.
fn validate_one(
    validator: &RecordValidator,
    path: &Path,
    format: &CliReportFormat,
    show_path: bool,
) -> Result<i32> {
    info!("Verifying {}...", path.display());

    match validator.validate_file(path) {
        Ok(report) => {
            render_report(path, &report, format, show_path)?;
            Ok(if report.passed() { 0 } else { 1 })
        }
        Err(AppError::SourceUnavailable { path, source }) => {
            println!("File not found.");
            error!("Cannot open {}: {}", path.display(), source);
            Ok(2)
        }
        Err(e) => Err(e.into()),
    }
}

/// Validate every `.sd3` file under a directory.
///
/// The overall exit code is the worst per-file outcome, so one bad file
/// fails the whole run while the remaining files are still reported.
fn run_directory(validator: &RecordValidator, dir: &Path, format: &CliReportFormat) -> Result<i32> {
    let files = FileManager::find_sd3_files(dir)
        .with_context(|| format!("Failed to scan directory: {}", dir.display()))?;

    if files.is_empty() {
        warn!("No .sd3 files found under {}", dir.display());
        return Ok(0);
    }

    info!("Found {} .sd3 file(s) under {}", files.len(), dir.display());

    let mut worst = 0;
    for file in &files {
        let code = validate_one(validator, file, format, true)?;
        worst = worst.max(code);
    }

    Ok(worst)
}

/// Self-test mode: synthesize the sample file in a temp directory and
/// validate it, so the checker can be exercised without external fixtures.
fn run_self_test(validator: &RecordValidator, format: &CliReportFormat) -> Result<i32> {
    info!("No input path given, validating a synthesized sample file");

    let dir = tempfile::tempdir().context("Failed to create temp directory for self-test")?;
    let path = fixture::write_sample_file(dir.path(), validator.format())?;

    validate_one(validator, &path, format, false)
}

/// Presentation step over a finished report. Detection never prints; only
/// this renderer writes to stdout.
fn render_report(
    path: &Path,
    report: &ValidationReport,
    format: &CliReportFormat,
    show_path: bool,
) -> Result<()> {
    match format {
        CliReportFormat::Text => {
            if show_path {
                println!("{}:", path.display());
            }
            for violation in &report.violations {
                println!("{}", violation);
            }
            println!("{}", report.summary());
        }
        CliReportFormat::Json => {
            let value = serde_json::json!({
                "file": path.display().to_string(),
                "passed": report.passed(),
                "lines_scanned": report.lines_scanned,
                "record_length": report.record_length,
                "violations": report.violations,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
