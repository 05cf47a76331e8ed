//! Helpers shared by unit tests.

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// A cell written into a test workbook.
#[derive(Debug, Clone, Copy)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Empty,
}

/// One worksheet: its name, the 0-based row of its first cell, and its rows.
pub struct Sheet {
    pub name: &'static str,
    pub first_row: u32,
    pub rows: Vec<Vec<Cell>>,
}

/// Write an `.xlsx` file with the given sheets.
pub fn write_workbook(path: &Path, sheets: &[Sheet]) {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name).unwrap();
        for (r, row) in sheet.rows.iter().enumerate() {
            let r = sheet.first_row + r as u32;
            for (c, cell) in row.iter().enumerate() {
                let c = c as u16;
                match cell {
                    Cell::Text(s) => {
                        worksheet.write_string(r, c, *s).unwrap();
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    Cell::Empty => {}
                }
            }
        }
    }
    workbook.save(path).unwrap();
}
