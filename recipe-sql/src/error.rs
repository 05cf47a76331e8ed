//! Error types for the spreadsheet to SQL conversion.
//!
//! - [`LoadError`] - Reading the tabular source (workbook or delimited text)
//! - [`ConvertError`] - Top-level conversion errors
//!
//! Conversion from [`LoadError`] is automatic, so `?` works across the
//! loader/transformer boundary.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Loading Errors
// =============================================================================

/// Errors while loading the tabular source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input path does not exist.
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook could not be opened or a sheet could not be read.
    #[error("Invalid workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// Delimited text could not be parsed.
    #[error("Invalid delimited text: {0}")]
    Csv(#[from] csv::Error),

    /// Delimiter is not a single-byte character.
    #[error("Invalid delimiter '{0}': must be a single ASCII character")]
    InvalidDelimiter(char),

    /// Content could not be decoded.
    #[error("Failed to decode content: {0}")]
    Encoding(String),

    /// Requested worksheet does not exist.
    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    /// Workbook has no worksheet at all.
    #[error("Workbook contains no worksheets")]
    NoSheets,

    /// No header row.
    #[error("No header row found")]
    NoHeaders,
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::convert_file`] and
/// [`crate::transform::transform`]. Any of these aborts the run before a
/// single byte of SQL is written.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source table could not be loaded.
    #[error("Error processing spreadsheet")]
    Load(#[from] LoadError),

    /// A numeric cell could not be turned into an integer.
    #[error("Row {row}: invalid number '{value}' in column '{column}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    /// The SQL file could not be written.
    #[error("Failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
