use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::application::UploadService;
use crate::domain::dataset::FileInsights;
use crate::domain::error::{AppError, Result};
use crate::domain::upload::UploadRecord;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::storage::InMemoryProfileStore;

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Profile a spreadsheet and summarize its data quality.
#[derive(Debug, Parser)]
#[command(name = "sheet-insight", version)]
pub struct Args {
    /// Spreadsheet to profile (xlsx, xls or csv by default).
    pub file: PathBuf,

    /// TOML configuration file. `sheet-insight.toml` is used when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Owner recorded on the upload.
    #[arg(long)]
    pub owner: Option<String>,

    /// Number of preview rows, overriding the configured value.
    #[arg(long, value_name = "ROWS")]
    pub preview: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Report<'a> {
    upload: &'a UploadRecord,
    insights: &'a FileInsights,
}

/// Run one profiling pass and render the result
pub async fn execute(args: &Args, mut config: AppConfig) -> Result<String> {
    if let Some(preview) = args.preview {
        config.preview_limit = preview;
    }

    let filename = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            AppError::ValidationError(format!("invalid file path: {}", args.file.display()))
        })?
        .to_string();

    let bytes = tokio::fs::read(&args.file).await?;
    info!(file = %args.file.display(), size = bytes.len(), "Profiling file");

    let service = UploadService::new(Arc::new(InMemoryProfileStore::new()), config);
    let record = service
        .upload(&filename, &bytes, args.owner.as_deref())
        .await?;
    let insights = service.insights(record.id).await?;

    match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&Report {
            upload: &record,
            insights: &insights,
        })
        .map_err(|e| AppError::Internal(format!("Failed to render report: {}", e))),
        OutputFormat::Text => Ok(render_text(&record, &insights)),
    }
}

pub fn render_text(record: &UploadRecord, insights: &FileInsights) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", insights.file);
    let _ = writeln!(out, "{}", insights.bundle.summary);
    for line in &insights.bundle.insights {
        let _ = writeln!(out, "  {}", line);
    }
    let _ = write!(
        out,
        "Preview: {} of {} rows",
        record.profile.data_preview.len(),
        record.profile.total_rows
    );
    out
}
