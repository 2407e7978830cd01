// ============================================================
// DATASET DOMAIN LAYER
// ============================================================
// Core types and value objects for dataset profiling
// No I/O, no async

mod cell_value;
mod column_profile;
mod dataset_profile;
mod insight;
mod ordered_map;
mod row;

pub use cell_value::{CellValue, DistinctKey};
pub use column_profile::{ColumnProfile, ColumnType, MAX_SAMPLE_VALUES};
pub use dataset_profile::DatasetProfile;
pub use insight::{ColumnDetail, FileInsights, InsightBundle};
pub use ordered_map::OrderedMap;
pub use row::{rows_from_json, Row};
