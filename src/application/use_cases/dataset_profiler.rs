// ============================================================
// DATASET PROFILER
// ============================================================
// Orchestrate column profiling and derive the quality score

use tracing::debug;

use crate::application::use_cases::column_profiler::ColumnProfiler;
use crate::application::use_cases::preview_sampler::PreviewSampler;
use crate::domain::dataset::{DatasetProfile, OrderedMap, Row};
use crate::domain::error::{AppError, Result};

/// Dataset profiler
#[derive(Debug, Clone, Default)]
pub struct DatasetProfiler {
    column_profiler: ColumnProfiler,
    preview: PreviewSampler,
}

impl DatasetProfiler {
    pub fn new(column_profiler: ColumnProfiler, preview: PreviewSampler) -> Self {
        Self {
            column_profiler,
            preview,
        }
    }

    /// Profiler with the default column profiler and a custom preview size
    pub fn with_preview_limit(limit: usize) -> Self {
        Self::new(ColumnProfiler::default(), PreviewSampler::new(limit))
    }

    /// Build the profile for a full set of rows.
    ///
    /// The first row's keys define the column set. Keys that only appear in
    /// later rows are not profiled, and rows missing a key count as null for
    /// that column.
    pub fn build_profile(&self, rows: &[Row]) -> Result<DatasetProfile> {
        let first_row = rows.first().ok_or(AppError::EmptyDataset)?;

        let columns: Vec<String> = first_row.columns().map(str::to_string).collect();
        let total_rows = rows.len();
        let total_columns = columns.len();

        let mut column_profiles = OrderedMap::with_capacity(total_columns);
        for column in &columns {
            column_profiles.insert(column.clone(), self.column_profiler.profile(column, rows));
        }

        let null_cells: usize = column_profiles.values().map(|p| p.null_count).sum();
        let data_quality_score = quality_score(total_rows * total_columns, null_cells);

        debug!(
            total_rows,
            total_columns,
            null_cells,
            data_quality_score,
            "Built dataset profile"
        );

        Ok(DatasetProfile {
            total_rows,
            total_columns,
            columns,
            column_profiles,
            data_quality_score,
            data_preview: self.preview.sample(rows).to_vec(),
        })
    }
}

/// Build a profile with default settings
pub fn build_profile(rows: &[Row]) -> Result<DatasetProfile> {
    DatasetProfiler::default().build_profile(rows)
}

/// Percentage of non-null cells rounded to 2 decimals.
///
/// A table with no cells is vacuously complete.
pub fn quality_score(total_cells: usize, null_cells: usize) -> f64 {
    if total_cells == 0 {
        return 100.0;
    }
    let filled = total_cells.saturating_sub(null_cells);
    round_to_hundredths(filled as f64 / total_cells as f64 * 100.0)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
