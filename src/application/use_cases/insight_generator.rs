// ============================================================
// INSIGHT GENERATOR
// ============================================================
// Turn a dataset profile into ordered natural-language observations

use crate::domain::dataset::{
    ColumnDetail, ColumnProfile, ColumnType, DatasetProfile, InsightBundle, MAX_SAMPLE_VALUES,
};

/// Insight generator
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightGenerator;

impl InsightGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the insight bundle for a profile.
    ///
    /// Insights follow column order; within a column the type insight comes
    /// before the missing-value insight.
    pub fn generate(&self, profile: &DatasetProfile) -> InsightBundle {
        let mut insights = Vec::with_capacity(profile.total_columns * 2);
        let mut column_details = Vec::with_capacity(profile.total_columns);

        for (name, column) in profile.profiles() {
            insights.push(type_insight(name, column));

            if column.has_missing_values() {
                insights.push(format!(
                    "⚠️ \"{}\" has {} missing values.",
                    name, column.null_count
                ));
            }

            column_details.push(ColumnDetail {
                name: name.to_string(),
                column_type: column.column_type,
                null_count: column.null_count,
                unique_count: column.unique_count,
                sample_values: column
                    .sample_values
                    .iter()
                    .take(MAX_SAMPLE_VALUES)
                    .cloned()
                    .collect(),
            });
        }

        InsightBundle {
            summary: summary(profile),
            insights,
            column_details,
        }
    }
}

/// Generate insights with the default generator
pub fn generate(profile: &DatasetProfile) -> InsightBundle {
    InsightGenerator::new().generate(profile)
}

fn type_insight(name: &str, column: &ColumnProfile) -> String {
    match column.column_type {
        ColumnType::Numeric => format!(
            "📊 \"{}\" is a numeric column with {} unique values.",
            name, column.unique_count
        ),
        ColumnType::Categorical => format!(
            "🔠 \"{}\" is a categorical column with {} unique values.",
            name, column.unique_count
        ),
    }
}

fn summary(profile: &DatasetProfile) -> String {
    format!(
        "✅ This dataset has {} rows and {} columns with a data quality score of {:.2}%.",
        profile.total_rows, profile.total_columns, profile.data_quality_score
    )
}
