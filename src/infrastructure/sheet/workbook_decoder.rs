// ============================================================
// WORKBOOK DECODER
// ============================================================
// Decode the first worksheet of an Excel/ODS workbook into rows

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use super::headers::{build_row, normalize_headers};
use super::SheetDecoder;
use crate::domain::dataset::{CellValue, Row};
use crate::domain::error::{AppError, Result};

/// Workbook decoder (xlsx, xlsm, xlsb, xls, ods)
#[derive(Debug, Clone, Default)]
pub struct WorkbookDecoder;

impl WorkbookDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl SheetDecoder for WorkbookDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Row>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| AppError::ParseError(format!("Failed to open workbook: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::ParseError("No worksheet found".to_string()))?
            .map_err(|e| AppError::ParseError(format!("Failed to read worksheet: {}", e)))?;

        Ok(rows_from_range(&range))
    }
}

/// Convert a worksheet range into rows, using its first row as the header
pub fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let mut sheet_rows = range.rows();

    let headers = match sheet_rows.next() {
        Some(header_row) => normalize_headers(header_row.iter().map(header_text)),
        None => return Vec::new(),
    };

    sheet_rows
        .filter_map(|cells| build_row(&headers, cells.iter().map(cell_value)))
        .collect()
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Map a worksheet cell to a value; empty and error cells are absent
fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Bool(b) => Some(CellValue::Boolean(*b)),
        Data::String(s) => Some(CellValue::Text(s.clone())),
        // Date cells keep their serial number, as spreadsheet readers do
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        _ => None,
    }
}
