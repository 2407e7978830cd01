// ============================================================
// DATASET PROFILE
// ============================================================
// Aggregate structural and quality description of one uploaded table

use serde::{Deserialize, Serialize};

use super::{ColumnProfile, OrderedMap, Row};

/// Profile of a whole dataset.
///
/// `column_profiles` has exactly the keys of `columns`, in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetProfile {
    pub total_rows: usize,

    pub total_columns: usize,

    /// Column names as ordered by the first row
    pub columns: Vec<String>,

    pub column_profiles: OrderedMap<ColumnProfile>,

    /// Percentage of non-null cells, rounded to 2 decimals
    pub data_quality_score: f64,

    /// Leading rows, verbatim
    pub data_preview: Vec<Row>,
}

impl DatasetProfile {
    pub fn column_profile(&self, column: &str) -> Option<&ColumnProfile> {
        self.column_profiles.get(column)
    }

    /// Profiles in column order
    pub fn profiles(&self) -> impl Iterator<Item = (&str, &ColumnProfile)> + '_ {
        self.columns
            .iter()
            .filter_map(|name| self.column_profiles.get(name).map(|p| (name.as_str(), p)))
    }

    pub fn total_cells(&self) -> usize {
        self.total_rows * self.total_columns
    }

    pub fn total_null_cells(&self) -> usize {
        self.column_profiles.values().map(|p| p.null_count).sum()
    }
}
