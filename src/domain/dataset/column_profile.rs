// ============================================================
// COLUMN PROFILE
// ============================================================
// Per-column statistics produced by the column profiler

use serde::{Deserialize, Serialize};

use super::CellValue;

/// Maximum number of sample values kept per column
pub const MAX_SAMPLE_VALUES: usize = 5;

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// More than 60% of defined values are numbers
    Numeric,

    /// Everything else, including columns with no defined values
    Categorical,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Categorical => "categorical",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Statistics for a single column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProfile {
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// Rows without a defined value for this column
    pub null_count: usize,

    /// Distinct defined values
    pub unique_count: usize,

    /// First defined values in row order, not deduplicated
    pub sample_values: Vec<CellValue>,
}

impl ColumnProfile {
    pub fn has_missing_values(&self) -> bool {
        self.null_count > 0
    }
}
