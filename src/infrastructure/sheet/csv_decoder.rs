// ============================================================
// CSV DECODER
// ============================================================
// Decode CSV bytes into rows with encoding and delimiter detection

use csv::{ReaderBuilder, Trim};
use encoding_rs::{UTF_8, WINDOWS_1252};

use super::headers::{build_row, normalize_headers};
use super::SheetDecoder;
use crate::domain::dataset::{CellValue, Row};
use crate::domain::error::{AppError, Result};

const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// CSV decoder
pub struct CsvDecoder {
    /// Fixed delimiter; detected from the content when `None`
    delimiter: Option<u8>,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self {
            delimiter: None,
            trim: true,
        }
    }
}

impl CsvDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parse CSV content from string
    pub fn decode_str(&self, content: &str) -> Result<Vec<Row>> {
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| Self::detect_delimiter(content));

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?;
        let headers = normalize_headers(headers.iter());

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            if let Some(row) = build_row(&headers, record.iter().map(parse_cell)) {
                rows.push(row);
            }
        }

        Ok(rows)
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let sample_lines: Vec<&str> = content.lines().take(10).collect();
        if sample_lines.is_empty() {
            return b',';
        }

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &DELIMITER_CANDIDATES {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());
            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

impl SheetDecoder for CsvDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Row>> {
        self.decode_str(&decode_text(bytes))
    }
}

/// UTF-8 (BOM stripped) with a Windows-1252 fallback
fn decode_text(bytes: &[u8]) -> String {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text.into_owned();
    }

    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}

/// Type a raw CSV field the way a spreadsheet reader would
fn parse_cell(raw: &str) -> Option<CellValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return Some(CellValue::Boolean(true));
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Some(CellValue::Boolean(false));
    }

    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(CellValue::Number(number)),
        _ => Some(CellValue::Text(raw.to_string())),
    }
}
