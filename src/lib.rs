//! Spreadsheet profiling and data quality insights.
//!
//! Rows decoded from an uploaded sheet go through [`build_profile`], which
//! classifies every column, counts nulls and distinct values and scores the
//! dataset. [`generate`] turns the resulting profile into a summary sentence
//! and ordered per-column insights.

mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use app::run;
pub use application::{build_profile, generate};
pub use domain::dataset::{
    CellValue, ColumnDetail, ColumnProfile, ColumnType, DatasetProfile, FileInsights,
    InsightBundle, Row,
};
pub use domain::error::{AppError, Result};
