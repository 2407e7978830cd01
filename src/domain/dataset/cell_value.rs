// ============================================================
// CELL VALUE
// ============================================================
// Closed set of values a spreadsheet cell can hold after decoding

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decoded cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// `true` / `false`
    Boolean(bool),

    /// Any numeric scalar (integers, floats, date serials)
    Number(f64),

    /// Free text, including the empty string
    Text(String),

    /// Explicit null slot. Profiled exactly like an absent key.
    Missing,
}

impl CellValue {
    /// Whether this cell contributes a defined value to its column
    pub fn is_defined(&self) -> bool {
        !matches!(self, CellValue::Missing)
    }

    /// Only true numeric scalars count; numeric-looking text does not
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }

    /// Hashable identity used for distinct-value counting.
    ///
    /// Numbers compare by value (`-0.0 == 0.0`), and values of different
    /// kinds never collide, so `3` and `"3"` stay distinct.
    pub fn distinct_key(&self) -> DistinctKey<'_> {
        match self {
            CellValue::Boolean(b) => DistinctKey::Boolean(*b),
            CellValue::Number(n) => {
                let normalized = if *n == 0.0 { 0.0 } else { *n };
                DistinctKey::Number(normalized.to_bits())
            }
            CellValue::Text(s) => DistinctKey::Text(s.as_str()),
            CellValue::Missing => DistinctKey::Missing,
        }
    }
}

/// Borrowed equality key for a [`CellValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistinctKey<'a> {
    Boolean(bool),
    Number(u64),
    Text(&'a str),
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Boolean(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Missing => write!(f, "null"),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_and_text_are_distinct() {
        let number = CellValue::from(3i64);
        let text = CellValue::from("3");
        assert_ne!(number.distinct_key(), text.distinct_key());
    }

    #[test]
    fn test_boolean_and_number_are_distinct() {
        assert_ne!(
            CellValue::Boolean(true).distinct_key(),
            CellValue::Number(1.0).distinct_key()
        );
    }

    #[test]
    fn test_signed_zero_is_one_value() {
        assert_eq!(
            CellValue::Number(-0.0).distinct_key(),
            CellValue::Number(0.0).distinct_key()
        );
    }

    #[test]
    fn test_json_shape() {
        let values = vec![
            CellValue::Number(1.5),
            CellValue::from("x"),
            CellValue::Boolean(false),
            CellValue::Missing,
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1.5,"x",false,null]"#);

        let back: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn test_empty_text_is_defined() {
        assert!(CellValue::from("").is_defined());
        assert!(!CellValue::Missing.is_defined());
    }
}
