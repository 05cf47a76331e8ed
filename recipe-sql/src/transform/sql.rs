//! SQL text rendering.
//!
//! Strings are embedded as literals with single quotes doubled; that is the
//! only escaping performed.

use crate::models::RecipeRecord;

/// Target table.
pub const TABLE_NAME: &str = "recipes";

/// Column list, in the order values are emitted.
pub const COLUMNS: [&str; 9] = [
    "name",
    "description",
    "difficulty",
    "prep_time_minutes",
    "cook_time_minutes",
    "servings",
    "category",
    "instructions",
    "image_url",
];

/// First header comment line.
pub const GENERATED_NOTICE: &str = "-- Auto-generated SQL from spreadsheet file";

/// Double every single quote.
///
/// ```
/// use recipe_sql::escape_sql_string;
/// assert_eq!(escape_sql_string("Chef's"), "Chef''s");
/// ```
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Quoted, escaped literal for a string.
pub fn render_string(value: &str) -> String {
    format!("'{}'", escape_sql_string(value))
}

/// Quoted, escaped literal, or bare `NULL`.
pub fn render_optional_string(value: Option<&str>) -> String {
    value.map(render_string).unwrap_or_else(|| "NULL".to_string())
}

/// Bare integer literal, or `NULL`.
pub fn render_optional_int(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "NULL".to_string())
}

impl RecipeRecord {
    /// Format the record as one INSERT statement (no trailing newline).
    pub fn to_insert_statement(&self) -> String {
        let values = [
            render_string(&self.name),
            render_optional_string(self.description.as_deref()),
            render_string(self.difficulty.as_str()),
            render_optional_int(self.prep_time_minutes),
            render_optional_int(self.cook_time_minutes),
            render_optional_int(self.servings),
            render_string(self.category_or_default()),
            render_optional_string(self.instructions.as_deref()),
            render_optional_string(self.image_url.as_deref()),
        ];

        let mut sql = format!(
            "INSERT INTO {} ({})\nVALUES (\n",
            TABLE_NAME,
            COLUMNS.join(", ")
        );
        sql.push_str(
            &values
                .iter()
                .map(|v| format!("  {}", v))
                .collect::<Vec<_>>()
                .join(",\n"),
        );
        sql.push_str("\n);");
        sql
    }
}

/// Wrap statements in the header comment and a transaction block.
///
/// Each statement is followed by a blank line. The result has no trailing
/// newline.
pub fn assemble_script(statements: &[String], source: &str) -> String {
    let mut lines = Vec::with_capacity(statements.len() * 2 + 4);
    lines.push(GENERATED_NOTICE.to_string());
    lines.push(format!("-- Source: {}\n", source));
    lines.push("BEGIN;\n".to_string());

    for statement in statements {
        lines.push(statement.clone());
        lines.push(String::new());
    }

    lines.push("COMMIT;".to_string());
    lines.join("\n")
}
