//! Tabular source loading with format, encoding and delimiter detection.
//!
//! Workbooks (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) are read with
//! `calamine`; delimited text (`.csv`, `.tsv`, `.txt`) with `csv`. Either
//! way the result is a [`Table`] whose column names are normalized and whose
//! rows remember the sheet line they came from.

use calamine::{open_workbook_auto, Data, Reader};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{LoadError, LoadResult};
use crate::models::{Row, Table};

/// Options for loading a tabular source
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Worksheet to read (default: first sheet)
    pub sheet: Option<String>,
    /// Delimiter for text sources (default: auto-detect)
    pub delimiter: Option<char>,
}

/// Kind of source, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Delimited,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") | Some("tsv") | Some("txt") => Self::Delimited,
            _ => Self::Workbook,
        }
    }
}

/// Normalize a column header: trimmed, lowercase, spaces as underscores.
///
/// `"Prep Time Minutes"` becomes `"prep_time_minutes"`.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Load a spreadsheet into a [`Table`].
///
/// Fails with [`LoadError::NotFound`] before touching any reader when the
/// path does not exist.
pub fn load_table<P: AsRef<Path>>(path: P, options: &LoadOptions) -> LoadResult<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let table = match SourceFormat::from_path(path) {
        SourceFormat::Workbook => load_workbook(path, options.sheet.as_deref())?,
        SourceFormat::Delimited => {
            let bytes = std::fs::read(path)?;
            parse_delimited_bytes(&bytes, options.delimiter)?
        }
    };

    info!(
        path = %path.display(),
        rows = table.rows.len(),
        columns = table.headers.len(),
        "loaded table"
    );
    Ok(table)
}

// =============================================================================
// Workbooks
// =============================================================================

fn load_workbook(path: &Path, sheet: Option<&str>) -> LoadResult<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(LoadError::SheetNotFound(name.to_string()));
            }
            workbook.worksheet_range(name)?
        }
        None => workbook.worksheet_range_at(0).ok_or(LoadError::NoSheets)??,
    };

    // Range starts at the first used cell, which may not be A1
    let first_line = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);
    let grid = range
        .rows()
        .map(|cells| cells.iter().map(cell_from_data).collect());

    table_from_grid(grid, first_line)
}

/// Convert a workbook cell to a [`Value`].
fn cell_from_data(data: &Data) -> Value {
    match data {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        other => Value::String(other.to_string()),
    }
}

// =============================================================================
// Delimited text
// =============================================================================

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> LoadResult<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8(bytes.to_vec())
            .map_err(|e| LoadError::Encoding(e.to_string())),
        "iso-8859-1" | "latin-1" | "latin1" => {
            Ok(encoding_rs::ISO_8859_15.decode(bytes).0.into_owned())
        }
        "windows-1252" | "cp1252" => Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()),
        _ => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Detect the delimiter by counting occurrences in the first line
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse delimited bytes, detecting encoding and (unless given) delimiter.
pub fn parse_delimited_bytes(bytes: &[u8], delimiter: Option<char>) -> LoadResult<Table> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    debug!(%encoding, delimiter = %delimiter.escape_debug(), "decoded delimited source");

    parse_delimited(&content, delimiter)
}

/// Parse delimited text with an explicit delimiter.
pub fn parse_delimited(content: &str, delimiter: char) -> LoadResult<Table> {
    if !delimiter.is_ascii() {
        return Err(LoadError::InvalidDelimiter(delimiter));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    // Rows are numbered by record, not by physical line, so quoted cells
    // spanning several lines do not shift later rows
    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cells: Vec<Value> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Value::Null
                } else {
                    Value::String(field.to_string())
                }
            })
            .collect();
        grid.push(cells);
    }

    table_from_grid(grid.into_iter(), 1)
}

// =============================================================================
// Grid to table
// =============================================================================

/// Build a table from consecutive rows, the header being at `first_line`.
///
/// Blank header cells become `unnamed_<n>`; for duplicated headers the first
/// column wins. Fully-empty data rows are dropped but still counted, so line
/// numbers keep matching the sheet.
fn table_from_grid<I>(mut rows_iter: I, first_line: usize) -> LoadResult<Table>
where
    I: Iterator<Item = Vec<Value>>,
{
    let header_cells = rows_iter.next().ok_or(LoadError::NoHeaders)?;

    let headers: Vec<String> = header_cells
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Value::Null => format!("unnamed_{}", i),
            Value::String(s) if s.trim().is_empty() => format!("unnamed_{}", i),
            Value::String(s) => normalize_column_name(s),
            other => normalize_column_name(&other.to_string()),
        })
        .collect();

    if headers.is_empty() {
        return Err(LoadError::NoHeaders);
    }

    let mut rows = Vec::new();
    for (idx, values) in rows_iter.enumerate() {
        let mut cells = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let value = values.get(i).cloned().unwrap_or(Value::Null);
            cells.entry(header.clone()).or_insert(value);
        }

        let row = Row::new(first_line + idx + 1, cells);
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    Ok(Table { headers, rows })
}
