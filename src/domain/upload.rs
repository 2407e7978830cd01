use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dataset::DatasetProfile;

/// Profile handed to the store, before an id and timestamp are assigned
#[derive(Debug, Clone)]
pub struct NewUpload {
    pub filename: String,
    pub uploaded_by: Option<String>,
    pub profile: DatasetProfile,
}

/// Persisted upload: the dataset profile plus storage metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub id: Uuid,
    pub filename: String,
    pub uploaded_by: Option<String>,
    #[serde(flatten)]
    pub profile: DatasetProfile,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadStats {
    pub total_files: usize,
    pub today_files: usize,
    pub this_week_files: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyUploadCount {
    pub date: NaiveDate,
    pub count: usize,
}
