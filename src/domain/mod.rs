pub mod error;
pub mod upload;

// Dataset profiling types
pub mod dataset;
