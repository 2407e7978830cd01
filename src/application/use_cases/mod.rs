pub mod column_classifier;
pub mod column_profiler;
pub mod dataset_profiler;
pub mod insight_generator;
pub mod preview_sampler;
pub mod upload_activity;
pub mod upload_service;
