// ============================================================
// INSIGHT TYPES
// ============================================================
// Narrative output derived from a dataset profile

use serde::{Deserialize, Serialize};

use super::{CellValue, ColumnType};

/// Per-column detail entry, mirrors the column profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDetail {
    pub name: String,

    #[serde(rename = "type")]
    pub column_type: ColumnType,

    pub null_count: usize,

    pub unique_count: usize,

    pub sample_values: Vec<CellValue>,
}

/// Summary sentence, ordered insights and column details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBundle {
    pub summary: String,

    pub insights: Vec<String>,

    pub column_details: Vec<ColumnDetail>,
}

/// Insight bundle tagged with the file it was generated for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInsights {
    pub file: String,

    #[serde(flatten)]
    pub bundle: InsightBundle,
}
