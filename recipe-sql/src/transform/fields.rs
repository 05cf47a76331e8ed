//! Field extraction: turning raw cells into typed recipe fields.

use serde_json::Value;

use crate::error::{ConvertError, ConvertResult};
use crate::models::{CellValue, RecipeRecord, Row};
use crate::validation::{validate_difficulty, RowWarning};

/// Render a cell as plain text. Missing cells become an empty string.
pub fn cell_to_string(value: &CellValue) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Read a numeric cell as a float and truncate it toward zero.
///
/// `7.9` gives `7`, `-2.5` gives `-2`, `"45"` gives `45`.
pub fn parse_truncated_int(value: &CellValue, row: usize, column: &str) -> ConvertResult<i64> {
    let invalid = || ConvertError::InvalidNumber {
        row,
        column: column.to_string(),
        value: cell_to_string(value),
    };

    let float = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            n.as_f64().ok_or_else(invalid)?
        }
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid())?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return Err(invalid()),
    };

    let truncated = float.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(invalid());
    }
    Ok(truncated as i64)
}

/// Optional string field: `None` when the column is absent or empty.
pub fn optional_string(row: &Row, column: &str) -> Option<String> {
    row.lookup(column, None).map(cell_to_string)
}

/// Optional integer field with an alternate column name.
pub fn optional_int(row: &Row, primary: &str, fallback: Option<&str>) -> ConvertResult<Option<i64>> {
    row.lookup_entry(primary, fallback)
        .map(|(column, value)| parse_truncated_int(value, row.line, column))
        .transpose()
}

impl RecipeRecord {
    /// Extract a record from one row.
    ///
    /// Invalid difficulties are recovered with a warning; numbers that cannot
    /// be read are an error for the whole run.
    pub fn from_row(row: &Row) -> ConvertResult<(RecipeRecord, Vec<RowWarning>)> {
        let mut warnings = Vec::new();

        let (difficulty, warning) = validate_difficulty(row.raw("difficulty"), row.line);
        warnings.extend(warning);

        let record = RecipeRecord {
            name: optional_string(row, "name").unwrap_or_default(),
            description: optional_string(row, "description"),
            difficulty,
            prep_time_minutes: optional_int(row, "prep_time", Some("prep_time_minutes"))?,
            cook_time_minutes: optional_int(row, "cook_time", Some("cook_time_minutes"))?,
            servings: optional_int(row, "servings", None)?,
            category: optional_string(row, "category"),
            instructions: optional_string(row, "instructions"),
            image_url: optional_string(row, "image_url"),
        };

        Ok((record, warnings))
    }
}
