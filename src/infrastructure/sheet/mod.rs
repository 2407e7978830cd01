// ============================================================
// SHEET DECODING INFRASTRUCTURE
// ============================================================
// File bytes -> ordered rows, one decoder per file family

mod csv_decoder;
mod headers;
mod json_decoder;
mod workbook_decoder;

use std::path::Path;

pub use csv_decoder::CsvDecoder;
pub use headers::{build_row, normalize_headers};
pub use json_decoder::JsonRowsDecoder;
pub use workbook_decoder::{rows_from_range, WorkbookDecoder};

use crate::domain::dataset::Row;
use crate::domain::error::{AppError, Result};

/// Turns a binary file into rows.
///
/// Column order follows the header row, and empty cells are left out of
/// the row rather than stored as empty strings.
pub trait SheetDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Row>>;
}

/// Lowercased extension of a file name, without the dot
pub fn file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Pick the decoder for a file extension
pub fn decoder_for_extension(
    extension: &str,
    csv_delimiter: Option<u8>,
) -> Result<Box<dyn SheetDecoder>> {
    match extension.to_ascii_lowercase().as_str() {
        "csv" | "tsv" | "txt" => {
            let decoder = match csv_delimiter {
                Some(delimiter) => CsvDecoder::new().with_delimiter(delimiter),
                None if extension.eq_ignore_ascii_case("tsv") => {
                    CsvDecoder::new().with_delimiter(b'\t')
                }
                None => CsvDecoder::new(),
            };
            Ok(Box::new(decoder))
        }
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Box::new(WorkbookDecoder::new())),
        "json" => Ok(Box::new(JsonRowsDecoder)),
        other => Err(AppError::UnsupportedFile(format!(
            "no decoder for .{} files",
            other
        ))),
    }
}
