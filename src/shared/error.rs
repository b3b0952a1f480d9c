use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the SBOM was written in full
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unsupported format, unreadable inventory, file I/O error, etc.)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures of the format selector.
///
/// Encoding is a pure function of its inputs, so these errors are cheap to
/// clone and compare: a streaming reader caches the first one it sees and
/// hands it back on every later read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The requested identifier matches none of the known schemas.
    /// The identifier is rendered as a quoted string literal.
    #[error("unsupported format {0:?}")]
    UnsupportedFormat(String),

    /// The chosen schema could not represent the inventory.
    #[error("failed to encode {format} document: {details}")]
    Encoding {
        format: &'static str,
        details: String,
    },
}

impl FormatError {
    pub fn encoding(format: &'static str, details: impl fmt::Display) -> Self {
        FormatError::Encoding {
            format,
            details: details.to_string(),
        }
    }
}

/// Application-specific errors for SBOM formatting.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Clone, Error)]
pub enum SbomError {
    /// Stable, greppable wrapper around selector failures.
    #[error("failed to format sbom: {0}")]
    FormatFailed(FormatError),

    #[error("Inventory file not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse inventory file: {path}\nDetails: {details}\n\n💡 Hint: The inventory must be a JSON document with a \"root\" and a \"components\" list")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Invalid inventory component #{index}: {reason}\n\n💡 Hint: Every component needs a non-empty name; versions must not contain whitespace")]
    InvalidInventory { index: usize, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl SbomError {
    /// Recovers an `SbomError` that a formatted reader tunnelled through `io::Error`
    pub fn from_io(err: &io::Error) -> Option<SbomError> {
        err.get_ref()
            .and_then(|inner| inner.downcast_ref::<SbomError>())
            .cloned()
    }
}

impl From<FormatError> for SbomError {
    fn from(err: FormatError) -> Self {
        SbomError::FormatFailed(err)
    }
}
