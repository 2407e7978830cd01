// ============================================================
// COLUMN TYPE CLASSIFIER
// ============================================================
// Decide numeric vs categorical from a column's defined values

use crate::domain::dataset::{CellValue, ColumnType};

/// Share of numeric values a column must exceed to be numeric. Strict `>`.
pub const NUMERIC_THRESHOLD: f64 = 0.6;

/// Column type classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnTypeClassifier;

impl ColumnTypeClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a column from its defined values.
    ///
    /// Only [`CellValue::Number`] counts as numeric; numeric-looking text is
    /// not coerced. A column with no values is categorical.
    pub fn classify(&self, values: &[&CellValue]) -> ColumnType {
        if values.is_empty() {
            return ColumnType::Categorical;
        }

        let numeric_count = values.iter().filter(|v| v.is_numeric()).count();
        let numeric_fraction = numeric_count as f64 / values.len() as f64;

        if numeric_fraction > NUMERIC_THRESHOLD {
            ColumnType::Numeric
        } else {
            ColumnType::Categorical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(values: &[CellValue]) -> ColumnType {
        let refs: Vec<&CellValue> = values.iter().collect();
        ColumnTypeClassifier::new().classify(&refs)
    }

    #[test]
    fn test_exactly_sixty_percent_is_categorical() {
        let values = vec![
            CellValue::Number(1.0),
            CellValue::Number(2.0),
            CellValue::Number(3.0),
            CellValue::from("a"),
            CellValue::from("b"),
        ];
        assert_eq!(classify(&values), ColumnType::Categorical);
    }

    #[test]
    fn test_eighty_percent_is_numeric() {
        let values = vec![
            CellValue::Number(1.0),
            CellValue::Number(2.0),
            CellValue::Number(3.0),
            CellValue::Number(4.0),
            CellValue::from("a"),
        ];
        assert_eq!(classify(&values), ColumnType::Numeric);
    }

    #[test]
    fn test_numeric_text_is_not_coerced() {
        let values = vec![CellValue::from("1"), CellValue::from("2"), CellValue::from("3")];
        assert_eq!(classify(&values), ColumnType::Categorical);
    }

    #[test]
    fn test_booleans_are_not_numeric() {
        let values = vec![CellValue::Boolean(true), CellValue::Boolean(false)];
        assert_eq!(classify(&values), ColumnType::Categorical);
    }

    #[test]
    fn test_empty_column_is_categorical() {
        assert_eq!(classify(&[]), ColumnType::Categorical);
    }
}
