//! High-level pipeline API: spreadsheet in, SQL script out.
//!
//! # Example
//!
//! ```rust,ignore
//! use recipe_sql::{convert_file, ConvertOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let output = convert_file("Gourmet_Pizza_Sauces.xlsx", &ConvertOptions::default())?;
//!     println!("{}", output.sql);
//!     Ok(())
//! }
//! ```

use std::path::Path;
use tracing::{debug, info};

use super::sql::assemble_script;
use crate::error::{ConvertError, ConvertResult};
use crate::models::{RecipeRecord, Row};
use crate::parser::{load_table, LoadOptions};
use crate::validation::RowWarning;

/// Options for a file conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Worksheet to read (default: first sheet)
    pub sheet: Option<String>,
    /// Delimiter for text sources (default: auto-detect)
    pub delimiter: Option<char>,
}

impl ConvertOptions {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            sheet: self.sheet.clone(),
            delimiter: self.delimiter,
        }
    }
}

/// Result of a conversion
#[derive(Debug, Clone)]
pub struct SqlOutput {
    /// Complete script, without trailing newline
    pub sql: String,
    /// Number of INSERT statements
    pub row_count: usize,
    /// Recovered per-row problems, in row order
    pub warnings: Vec<RowWarning>,
}

/// Transform rows into a SQL script.
///
/// `source` is written into the header comment. Rows are emitted in input
/// order; the first row that cannot be converted aborts the whole script.
pub fn transform(rows: &[Row], source: &str) -> ConvertResult<SqlOutput> {
    let mut statements = Vec::with_capacity(rows.len());
    let mut warnings = Vec::new();

    for row in rows {
        let (record, row_warnings) = RecipeRecord::from_row(row)?;
        debug!(row = row.line, name = %record.name, "converted row");
        statements.push(record.to_insert_statement());
        warnings.extend(row_warnings);
    }

    Ok(SqlOutput {
        sql: assemble_script(&statements, source),
        row_count: statements.len(),
        warnings,
    })
}

/// Load a spreadsheet and transform it.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> ConvertResult<SqlOutput> {
    let path = path.as_ref();
    let table = load_table(path, &options.load_options())?;
    let output = transform(&table.rows, &path.display().to_string())?;

    info!(
        rows = output.row_count,
        warnings = output.warnings.len(),
        "generated SQL"
    );
    Ok(output)
}

/// Write a finished script to disk.
pub fn write_sql<P: AsRef<Path>>(output: &SqlOutput, path: P) -> ConvertResult<()> {
    let path = path.as_ref();
    std::fs::write(path, &output.sql).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}
