use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the failures that halt a merge run.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as listing directories or creating the
    /// output directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when a workbook cannot be opened or parsed.
    #[error("failed to read workbook {}: {source}", .path.display())]
    ReadWorkbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when a workbook does not contain anything we can read.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised when a configured input directory does not exist.
    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
