use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested page or document was rendered
    Success = 0,
    /// The package requested with --package is not installed
    PackageNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing status file, duplicate package, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PackageNotFound => write!(f, "Package Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors raised outside the parsing core.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("dpkg status file not found: {path}\n\n💡 Hint: {suggestion}")]
    StatusFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read dpkg status file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    StatusFileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("No usable package records in: {path}\nDetails: all {dropped} record(s) lack a valid Package field\n\n💡 Hint: Please verify that the file is a dpkg status file")]
    NoUsableRecords { path: PathBuf, dropped: usize },

    #[error("Package not found: {name}\n\n💡 Hint: Package names are case-sensitive; run without --package to list installed packages")]
    PackageNotFound { name: String },

    /// Validation error for configuration and builder values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl IndexError {
    /// Maps the error to the exit code the CLI should terminate with
    pub fn exit_code(&self) -> ExitCode {
        match self {
            IndexError::PackageNotFound { .. } => ExitCode::PackageNotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}
