//! Per-row field validation.
//!
//! Validation here never fails a row: an unacceptable value is replaced by a
//! default and reported as a [`RowWarning`] so the operator can fix the sheet.

use std::fmt;
use tracing::warn;

use crate::models::{CellValue, Difficulty};
use crate::transform::fields::cell_to_string;

/// A recovered problem in one row
#[derive(Debug, Clone, PartialEq)]
pub struct RowWarning {
    /// Display row number (as the spreadsheet user sees it)
    pub row: usize,
    pub field: String,
    /// Offending value, as read
    pub value: String,
    pub message: String,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.row, self.message)
    }
}

/// Validate a raw difficulty cell.
///
/// A missing column silently means [`Difficulty::Easy`]. A present value is
/// lowercased and must be `easy`, `medium` or `hard`; anything else (an empty
/// cell included) falls back to `easy` with a warning.
pub fn validate_difficulty(
    raw: Option<&CellValue>,
    display_row: usize,
) -> (Difficulty, Option<RowWarning>) {
    let Some(value) = raw else {
        return (Difficulty::default(), None);
    };

    let label = cell_to_string(value).to_lowercase();
    match Difficulty::from_label(&label) {
        Some(difficulty) => (difficulty, None),
        None => {
            let warning = RowWarning {
                row: display_row,
                field: "difficulty".to_string(),
                message: format!(
                    "Invalid difficulty '{}', defaulting to '{}'",
                    label,
                    Difficulty::default()
                ),
                value: label,
            };
            warn!(row = display_row, value = %warning.value, "invalid difficulty, defaulting to 'easy'");
            (Difficulty::default(), Some(warning))
        }
    }
}
