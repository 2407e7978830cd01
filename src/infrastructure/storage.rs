use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::error::Result;
use crate::domain::upload::{NewUpload, UploadRecord};

/// Persistence collaborator for dataset profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Store a profile, assigning its id and creation time
    async fn save(&self, upload: NewUpload) -> Result<UploadRecord>;

    async fn get(&self, id: Uuid) -> Result<Option<UploadRecord>>;

    /// Uploads owned by `owner`, newest first
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<UploadRecord>>;
}

/// Process-local store, mostly for the CLI and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    records: Arc<RwLock<Vec<UploadRecord>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-built record, keeping its id and timestamp
    pub async fn insert_record(&self, record: UploadRecord) {
        self.records.write().await.push(record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn save(&self, upload: NewUpload) -> Result<UploadRecord> {
        let record = UploadRecord {
            id: Uuid::new_v4(),
            filename: upload.filename,
            uploaded_by: upload.uploaded_by,
            profile: upload.profile,
            created_at: Utc::now(),
        };

        self.records.write().await.push(record.clone());
        debug!(id = %record.id, filename = %record.filename, "Stored upload");

        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<UploadRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_owner(&self, owner: &str) -> Result<Vec<UploadRecord>> {
        let records = self.records.read().await;
        let mut owned: Vec<UploadRecord> = records
            .iter()
            .filter(|r| r.uploaded_by.as_deref() == Some(owner))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}
