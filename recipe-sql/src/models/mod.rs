//! Domain models for the recipe conversion.
//!
//! - [`CellValue`] - Raw cell content (string, number, or empty)
//! - [`Row`] - One data row keyed by normalized column name
//! - [`Table`] - Loaded tabular source
//! - [`Difficulty`] - Accepted difficulty levels
//! - [`RecipeRecord`] - Per-row record, consumed into an INSERT statement

use serde_json::{Map, Value};
use std::fmt;

/// A raw spreadsheet cell.
///
/// Strings and numbers keep their JSON shape; `Null` is the empty/missing marker.
pub type CellValue = Value;

/// Check whether a cell counts as present.
///
/// Only `Null` and the empty string are missing; whitespace is content.
pub fn is_present(value: &CellValue) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

// =============================================================================
// Row / Table
// =============================================================================

/// One data row from the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based line in the spreadsheet (header is line 1)
    pub line: usize,
    /// Cells keyed by normalized column name
    pub cells: Map<String, Value>,
}

impl Row {
    pub fn new(line: usize, cells: Map<String, Value>) -> Self {
        Self { line, cells }
    }

    /// Build rows from plain JSON objects, numbering them as a spreadsheet
    /// would (first data row is line 2). Keys are normalized.
    pub fn from_objects(objects: Vec<Map<String, Value>>) -> Vec<Row> {
        objects
            .into_iter()
            .enumerate()
            .map(|(idx, obj)| {
                let cells = obj
                    .into_iter()
                    .map(|(k, v)| (crate::parser::normalize_column_name(&k), v))
                    .collect();
                Row::new(idx + 2, cells)
            })
            .collect()
    }

    /// Look up a column, falling back to an alternate name when the primary
    /// one is absent or empty.
    pub fn lookup(&self, primary: &str, fallback: Option<&str>) -> Option<&CellValue> {
        self.lookup_entry(primary, fallback).map(|(_, value)| value)
    }

    /// Like [`Row::lookup`], also returning the column name that matched.
    pub fn lookup_entry(
        &self,
        primary: &str,
        fallback: Option<&str>,
    ) -> Option<(&str, &CellValue)> {
        std::iter::once(primary)
            .chain(fallback)
            .find_map(|column| {
                self.cells
                    .get_key_value(column)
                    .filter(|(_, v)| is_present(v))
                    .map(|(k, v)| (k.as_str(), v))
            })
    }

    /// Raw value for a column without the presence filter.
    pub fn raw(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// True when every cell is missing.
    pub fn is_blank(&self) -> bool {
        !self.cells.values().any(is_present)
    }
}

/// A loaded tabular source.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Normalized column headers, in sheet order
    pub headers: Vec<String>,
    /// Data rows, in sheet order
    pub rows: Vec<Row>,
}

// =============================================================================
// Difficulty
// =============================================================================

/// Recipe difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a lowercased difficulty label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Recipe Record
// =============================================================================

/// Category used when the sheet leaves it blank.
pub const DEFAULT_CATEGORY: &str = "Sauce";

/// A recipe extracted from one row.
///
/// String fields hold raw (unescaped) text; escaping happens when the
/// statement is rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeRecord {
    pub name: String,
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub prep_time_minutes: Option<i64>,
    pub cook_time_minutes: Option<i64>,
    pub servings: Option<i64>,
    pub category: Option<String>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
}

impl RecipeRecord {
    /// Category to store, applying the default.
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => Row::new(2, map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_lookup_primary_wins() {
        let r = row(json!({ "prep_time": 10, "prep_time_minutes": 20 }));
        assert_eq!(r.lookup("prep_time", Some("prep_time_minutes")), Some(&json!(10)));
    }

    #[test]
    fn test_lookup_falls_back() {
        let r = row(json!({ "prep_time_minutes": 20 }));
        assert_eq!(r.lookup("prep_time", Some("prep_time_minutes")), Some(&json!(20)));
    }

    #[test]
    fn test_lookup_empty_primary_falls_back() {
        let r = row(json!({ "prep_time": "", "prep_time_minutes": 15 }));
        assert_eq!(r.lookup("prep_time", Some("prep_time_minutes")), Some(&json!(15)));

        let r = row(json!({ "prep_time": null, "prep_time_minutes": 15 }));
        assert_eq!(r.lookup("prep_time", Some("prep_time_minutes")), Some(&json!(15)));
    }

    #[test]
    fn test_whitespace_is_present() {
        let r = row(json!({ "description": "   " }));
        assert_eq!(r.lookup("description", None), Some(&json!("   ")));
        assert!(!r.is_blank());
    }

    #[test]
    fn test_lookup_entry_reports_matched_column() {
        let r = row(json!({ "prep_time": null, "prep_time_minutes": 15 }));
        assert_eq!(
            r.lookup_entry("prep_time", Some("prep_time_minutes")),
            Some(("prep_time_minutes", &json!(15)))
        );
    }

    #[test]
    fn test_lookup_both_absent() {
        let r = row(json!({ "name": "Pesto" }));
        assert_eq!(r.lookup("prep_time", Some("prep_time_minutes")), None);
        assert_eq!(r.lookup("servings", None), None);
    }

    #[test]
    fn test_from_objects_normalizes_and_numbers() {
        let mut obj = Map::new();
        obj.insert("Image URL".into(), json!("http://x"));
        let rows = Row::from_objects(vec![Map::new(), obj]);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].lookup("image_url", None), Some(&json!("http://x")));
    }

    #[test]
    fn test_blank_row() {
        assert!(row(json!({ "name": "", "servings": null })).is_blank());
        assert!(!row(json!({ "name": "", "servings": 0 })).is_blank());
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::from_label("medium"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_label("Medium"), None);
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_category_default() {
        let record = RecipeRecord::default();
        assert_eq!(record.category_or_default(), "Sauce");
    }
}
