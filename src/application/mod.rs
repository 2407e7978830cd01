pub mod use_cases;

pub use use_cases::column_classifier::ColumnTypeClassifier;
pub use use_cases::column_profiler::ColumnProfiler;
pub use use_cases::dataset_profiler::{build_profile, DatasetProfiler};
pub use use_cases::insight_generator::{generate, InsightGenerator};
pub use use_cases::preview_sampler::PreviewSampler;
pub use use_cases::upload_service::UploadService;
