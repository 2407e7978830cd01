// ============================================================
// ROW
// ============================================================
// One decoded record: ordered column name -> cell value

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CellValue, OrderedMap};
use crate::domain::error::{AppError, Result};

/// A single data row.
///
/// Keys keep the order the decoder saw them in. A column that is not
/// present in the row is null for that row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: OrderedMap<CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for constructing rows in code
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column, value.into());
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column, value);
    }

    /// Raw cell, including explicit `Missing`
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Cell value if the key is present and holds a defined value
    pub fn defined(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column).filter(|v| v.is_defined())
    }

    /// Column names in key order
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.cells.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> + '_ {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert a loosely typed JSON row into a [`Row`].
    ///
    /// The row must be an object whose values are scalars or null.
    pub fn from_json(index: usize, value: Value) -> Result<Self> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(AppError::MalformedRow(format!(
                    "row {} is not a mapping (found {})",
                    index + 1,
                    json_kind(&other)
                )))
            }
        };

        let mut row = Row::new();
        for (column, cell) in object {
            let value = match cell {
                Value::Null => CellValue::Missing,
                Value::Bool(b) => CellValue::Boolean(b),
                Value::Number(n) => match n.as_f64() {
                    Some(f) => CellValue::Number(f),
                    None => {
                        return Err(AppError::MalformedRow(format!(
                            "row {} column '{}' holds an unrepresentable number",
                            index + 1,
                            column
                        )))
                    }
                },
                Value::String(s) => CellValue::Text(s),
                nested => {
                    return Err(AppError::MalformedRow(format!(
                        "row {} column '{}' holds a nested {}",
                        index + 1,
                        column,
                        json_kind(&nested)
                    )))
                }
            };
            row.insert(column, value);
        }

        Ok(row)
    }
}

/// Convert a sequence of JSON rows, failing on the first malformed one
pub fn rows_from_json(values: Vec<Value>) -> Result<Vec<Row>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| Row::from_json(index, value))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_and_missing_are_not_defined() {
        let row = Row::new().with("a", 1i64).with("b", CellValue::Missing);
        assert!(row.defined("a").is_some());
        assert!(row.defined("b").is_none());
        assert!(row.get("b").is_some());
        assert!(row.defined("c").is_none());
    }

    #[test]
    fn test_from_json_scalars() {
        let row = Row::from_json(0, json!({"name": "Ann", "age": 31, "ok": true, "x": null}))
            .unwrap();
        assert_eq!(row.get("name"), Some(&CellValue::from("Ann")));
        assert_eq!(row.get("age"), Some(&CellValue::Number(31.0)));
        assert_eq!(row.get("ok"), Some(&CellValue::Boolean(true)));
        assert_eq!(row.get("x"), Some(&CellValue::Missing));
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["name", "age", "ok", "x"]);
    }

    #[test]
    fn test_from_json_rejects_non_mapping() {
        let err = rows_from_json(vec![json!({"a": 1}), json!([1, 2])]).unwrap_err();
        match err {
            AppError::MalformedRow(msg) => assert!(msg.contains("row 2")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_nested_cell() {
        let err = Row::from_json(0, json!({"a": {"b": 1}})).unwrap_err();
        assert!(matches!(err, AppError::MalformedRow(_)));
    }

    #[test]
    fn test_serializes_in_key_order() {
        let row = Row::new().with("z", 1i64).with("a", "x");
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"z":1.0,"a":"x"}"#);
    }
}
