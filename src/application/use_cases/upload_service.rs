// ============================================================
// UPLOAD SERVICE USE CASE
// ============================================================
// Orchestrate decoding, profiling, storage and insight generation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::use_cases::dataset_profiler::DatasetProfiler;
use crate::application::use_cases::insight_generator::InsightGenerator;
use crate::application::use_cases::upload_activity::{upload_stats, uploads_per_day};
use crate::domain::dataset::FileInsights;
use crate::domain::error::{AppError, Result};
use crate::domain::upload::{DailyUploadCount, NewUpload, UploadRecord, UploadStats};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::sheet::{decoder_for_extension, file_extension};
use crate::infrastructure::storage::ProfileStore;

/// Upload use case
pub struct UploadService<S: ProfileStore> {
    store: Arc<S>,
    config: AppConfig,
    profiler: DatasetProfiler,
    insights: InsightGenerator,
}

impl<S: ProfileStore> UploadService<S> {
    pub fn new(store: Arc<S>, config: AppConfig) -> Self {
        let profiler = DatasetProfiler::with_preview_limit(config.preview_limit);
        Self {
            store,
            config,
            profiler,
            insights: InsightGenerator::new(),
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Decode, profile and store one uploaded file
    pub async fn upload(
        &self,
        filename: &str,
        bytes: &[u8],
        uploaded_by: Option<&str>,
    ) -> Result<UploadRecord> {
        let extension = file_extension(filename)
            .filter(|ext| self.config.is_extension_allowed(ext))
            .ok_or_else(|| {
                warn!(filename, "Rejected upload with unsupported extension");
                AppError::UnsupportedFile(format!("{} is not an accepted file type", filename))
            })?;

        if bytes.len() > self.config.max_upload_bytes {
            warn!(filename, size = bytes.len(), "Rejected oversized upload");
            return Err(AppError::FileTooLarge {
                size: bytes.len(),
                limit: self.config.max_upload_bytes,
            });
        }

        let delimiter = self.config.csv_delimiter.map(|c| c as u8);
        let decoder = decoder_for_extension(&extension, delimiter)?;
        let rows = decoder.decode(bytes)?;

        let profile = self.profiler.build_profile(&rows)?;

        info!(
            filename,
            total_rows = profile.total_rows,
            total_columns = profile.total_columns,
            data_quality_score = profile.data_quality_score,
            "File uploaded and parsed"
        );

        self.store
            .save(NewUpload {
                filename: filename.to_string(),
                uploaded_by: uploaded_by.map(str::to_string),
                profile,
            })
            .await
    }

    /// Insights for a stored upload
    pub async fn insights(&self, id: Uuid) -> Result<FileInsights> {
        let record = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("File not found: {}", id)))?;

        Ok(FileInsights {
            file: record.filename,
            bundle: self.insights.generate(&record.profile),
        })
    }

    /// All uploads of an owner, newest first
    pub async fn history(&self, owner: &str) -> Result<Vec<UploadRecord>> {
        self.store.list_by_owner(owner).await
    }

    /// Most recent uploads of an owner
    pub async fn recent(&self, owner: &str, limit: usize) -> Result<Vec<UploadRecord>> {
        let mut records = self.store.list_by_owner(owner).await?;
        records.truncate(limit);
        Ok(records)
    }

    pub async fn stats(&self, owner: &str, now: DateTime<Utc>) -> Result<UploadStats> {
        let records = self.store.list_by_owner(owner).await?;
        Ok(upload_stats(&records, now))
    }

    pub async fn uploads_per_day(
        &self,
        owner: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<DailyUploadCount>> {
        let records = self.store.list_by_owner(owner).await?;
        Ok(uploads_per_day(&records, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryProfileStore;

    fn create_service() -> UploadService<InMemoryProfileStore> {
        UploadService::new(Arc::new(InMemoryProfileStore::new()), AppConfig::default())
    }

    #[tokio::test]
    async fn test_upload_csv_and_generate_insights() {
        let service = create_service();
        let record = service
            .upload("people.csv", b"a,b\n1,x\n2,y\n,z", Some("u1"))
            .await
            .unwrap();

        assert_eq!(record.profile.total_rows, 3);
        assert_eq!(record.profile.data_quality_score, 83.33);
        assert_eq!(record.uploaded_by.as_deref(), Some("u1"));

        let insights = service.insights(record.id).await.unwrap();
        assert_eq!(insights.file, "people.csv");
        assert_eq!(insights.bundle.insights.len(), 3);
        assert!(insights.bundle.summary.contains("3 rows and 2 columns"));
    }

    #[tokio::test]
    async fn test_header_only_file_is_empty_dataset() {
        let service = create_service();
        let err = service.upload("empty.csv", b"a,b\n", None).await.unwrap_err();

        assert!(matches!(err, AppError::EmptyDataset));
        assert!(err.is_user_facing());
        assert_eq!(service.store().len().await, 0);
    }

    #[tokio::test]
    async fn test_rejects_disallowed_extension() {
        let service = create_service();
        let err = service.upload("rows.json", b"[]", None).await.unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFile(_)));

        let err = service.upload("no_extension", b"a\n1", None).await.unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFile(_)));
    }

    #[tokio::test]
    async fn test_rejects_oversized_file() {
        let config = AppConfig {
            max_upload_bytes: 4,
            ..AppConfig::default()
        };
        let service = UploadService::new(Arc::new(InMemoryProfileStore::new()), config);

        let err = service.upload("big.csv", b"a,b\n1,2", None).await.unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { size: 7, limit: 4 }));
    }

    #[tokio::test]
    async fn test_json_rows_when_enabled() {
        let config = AppConfig {
            allowed_extensions: vec!["json".to_string()],
            preview_limit: 1,
            ..AppConfig::default()
        };
        let service = UploadService::new(Arc::new(InMemoryProfileStore::new()), config);

        let record = service
            .upload("rows.json", br#"[{"a": 1}, {"a": "1"}]"#, None)
            .await
            .unwrap();
        assert_eq!(record.profile.column_profile("a").unwrap().unique_count, 2);
        assert_eq!(record.profile.data_preview.len(), 1);

        let err = service
            .upload("bad.json", br#"[{"a": 1}, "oops"]"#, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedRow(_)));
    }

    #[tokio::test]
    async fn test_unknown_id_not_found() {
        let service = create_service();
        let err = service.insights(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_history_recent_and_stats() {
        let service = create_service();
        for name in ["a.csv", "b.csv", "c.csv"] {
            service.upload(name, b"x\n1", Some("u1")).await.unwrap();
        }
        service.upload("d.csv", b"x\n1", Some("u2")).await.unwrap();

        assert_eq!(service.history("u1").await.unwrap().len(), 3);
        assert_eq!(service.recent("u1", 2).await.unwrap().len(), 2);

        let now = Utc::now();
        let stats = service.stats("u1", now).await.unwrap();
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.today_files, 3);

        let per_day = service.uploads_per_day("u1", now).await.unwrap();
        assert_eq!(per_day.iter().map(|d| d.count).sum::<usize>(), 3);
    }
}
