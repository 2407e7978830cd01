// ============================================================
// COLUMN PROFILER
// ============================================================
// Null, distinct and sample statistics for a single column

use std::collections::HashSet;

use crate::application::use_cases::column_classifier::ColumnTypeClassifier;
use crate::domain::dataset::{CellValue, ColumnProfile, Row, MAX_SAMPLE_VALUES};

/// Column profiler
#[derive(Debug, Clone, Default)]
pub struct ColumnProfiler {
    classifier: ColumnTypeClassifier,
}

impl ColumnProfiler {
    pub fn new(classifier: ColumnTypeClassifier) -> Self {
        Self { classifier }
    }

    /// Profile one column across all rows.
    ///
    /// Only absent keys and explicit `Missing` cells count as null; an empty
    /// string is a defined value.
    pub fn profile(&self, column: &str, rows: &[Row]) -> ColumnProfile {
        let values: Vec<&CellValue> = rows.iter().filter_map(|row| row.defined(column)).collect();

        let unique_count = values
            .iter()
            .map(|v| v.distinct_key())
            .collect::<HashSet<_>>()
            .len();

        let sample_values = values
            .iter()
            .take(MAX_SAMPLE_VALUES)
            .map(|v| (*v).clone())
            .collect();

        ColumnProfile {
            column_type: self.classifier.classify(&values),
            null_count: rows.len() - values.len(),
            unique_count,
            sample_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::ColumnType;

    fn create_rows(values: Vec<Option<CellValue>>) -> Vec<Row> {
        values
            .into_iter()
            .map(|value| match value {
                Some(v) => Row::new().with("col", v),
                None => Row::new().with("other", 0i64),
            })
            .collect()
    }

    #[test]
    fn test_counts_absent_keys_as_null() {
        let rows = create_rows(vec![
            Some(CellValue::Number(1.0)),
            None,
            Some(CellValue::Number(2.0)),
            Some(CellValue::Missing),
        ]);
        let profile = ColumnProfiler::default().profile("col", &rows);

        assert_eq!(profile.null_count, 2);
        assert_eq!(profile.unique_count, 2);
        assert_eq!(profile.column_type, ColumnType::Numeric);
    }

    #[test]
    fn test_empty_string_is_defined() {
        let rows = create_rows(vec![Some(CellValue::from("")), Some(CellValue::from("x"))]);
        let profile = ColumnProfiler::default().profile("col", &rows);

        assert_eq!(profile.null_count, 0);
        assert_eq!(profile.unique_count, 2);
    }

    #[test]
    fn test_number_and_text_counted_separately() {
        let rows = create_rows(vec![
            Some(CellValue::Number(3.0)),
            Some(CellValue::from("3")),
            Some(CellValue::Number(3.0)),
        ]);
        let profile = ColumnProfiler::default().profile("col", &rows);

        assert_eq!(profile.unique_count, 2);
    }

    #[test]
    fn test_samples_first_five_in_order_with_duplicates() {
        let rows = create_rows(vec![
            Some(CellValue::from("a")),
            None,
            Some(CellValue::from("a")),
            Some(CellValue::from("b")),
            Some(CellValue::from("c")),
            Some(CellValue::from("d")),
            Some(CellValue::from("e")),
        ]);
        let profile = ColumnProfiler::default().profile("col", &rows);

        assert_eq!(
            profile.sample_values,
            vec![
                CellValue::from("a"),
                CellValue::from("a"),
                CellValue::from("b"),
                CellValue::from("c"),
                CellValue::from("d"),
            ]
        );
    }

    #[test]
    fn test_null_plus_defined_equals_rows() {
        let rows = create_rows(vec![
            Some(CellValue::Boolean(true)),
            None,
            None,
            Some(CellValue::Number(9.5)),
        ]);
        let profile = ColumnProfiler::default().profile("col", &rows);

        let defined = rows.iter().filter(|r| r.defined("col").is_some()).count();
        assert_eq!(profile.null_count + defined, rows.len());
        assert!(profile.unique_count <= rows.len() - profile.null_count);
    }

    #[test]
    fn test_all_null_column() {
        let rows = create_rows(vec![None, None]);
        let profile = ColumnProfiler::default().profile("col", &rows);

        assert_eq!(profile.null_count, 2);
        assert_eq!(profile.unique_count, 0);
        assert!(profile.sample_values.is_empty());
        assert_eq!(profile.column_type, ColumnType::Categorical);
    }
}
