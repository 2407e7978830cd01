use serde_json::Value;

use super::SheetDecoder;
use crate::domain::dataset::{rows_from_json, Row};
use crate::domain::error::{AppError, Result};

/// Decoder for a JSON array of row objects
#[derive(Debug, Clone, Default)]
pub struct JsonRowsDecoder;

impl SheetDecoder for JsonRowsDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Row>> {
        let values: Vec<Value> = serde_json::from_slice(bytes)
            .map_err(|e| AppError::ParseError(format!("Expected a JSON array of rows: {}", e)))?;
        rows_from_json(values)
    }
}
