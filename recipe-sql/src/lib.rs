//! # recipe-sql - Spreadsheet to SQL INSERT conversion
//!
//! Reads a recipe spreadsheet and produces a SQL script of INSERT statements
//! for the `recipes` table, wrapped in a single transaction.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Spreadsheet │────▶│   Parser    │────▶│  Transform  │────▶│  SQL script │
//! │ (xlsx/csv)  │     │ (normalize) │     │ (validate)  │     │ (BEGIN..)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use recipe_sql::{convert_file, ConvertOptions};
//!
//! let output = convert_file("Gourmet_Pizza_Sauces.xlsx", &ConvertOptions::default()).unwrap();
//! println!("{} recipes converted", output.row_count);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Rows, tables and recipe records
//! - [`parser`] - Workbook and delimited text loading
//! - [`validation`] - Per-row field validation
//! - [`transform`] - Field extraction, SQL rendering and pipeline

// Core modules
pub mod error;
pub mod models;

// Loading
pub mod parser;

// Validation
pub mod validation;

// Transformation
pub mod transform;

#[cfg(test)]
mod testutil;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConvertError, ConvertResult, LoadError, LoadResult};

pub use models::{CellValue, Difficulty, RecipeRecord, Row, Table, DEFAULT_CATEGORY};

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, load_table, normalize_column_name,
    parse_delimited, parse_delimited_bytes, LoadOptions, SourceFormat,
};

pub use validation::{validate_difficulty, RowWarning};

pub use transform::{
    convert_file, escape_sql_string, render_optional_string, transform, write_sql,
    ConvertOptions, SqlOutput,
};
