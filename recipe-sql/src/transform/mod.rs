//! Row transformation.
//!
//! - Fields: lookup with fallback, numeric truncation, record extraction
//! - SQL: escaping and statement rendering
//! - Pipeline: load, transform, write

pub mod fields;
pub mod pipeline;
pub mod sql;

pub use fields::{cell_to_string, optional_int, optional_string, parse_truncated_int};
pub use pipeline::*;
pub use sql::{
    assemble_script, escape_sql_string, render_optional_int, render_optional_string,
    render_string,
};
