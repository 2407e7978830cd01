use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum AppError {
    /// The decoded sheet has no data rows
    EmptyDataset,
    /// A raw row is not a mapping, or holds a non-scalar cell
    MalformedRow(String),
    UnsupportedFile(String),
    FileTooLarge { size: usize, limit: usize },
    ParseError(String),
    NotFound(String),
    ValidationError(String),
    ConfigError(String),
    StorageError(String),
    IoError(String),
    Internal(String),
}

impl AppError {
    /// Errors caused by the shape of the uploaded data rather than by the system
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::EmptyDataset
                | AppError::MalformedRow(_)
                | AppError::UnsupportedFile(_)
                | AppError::FileTooLarge { .. }
        )
    }

    /// Message suitable for showing to the person who uploaded the file
    pub fn user_message(&self) -> String {
        match self {
            AppError::EmptyDataset => "The file has no data rows.".to_string(),
            AppError::MalformedRow(msg) => format!("The file has no readable data rows: {}", msg),
            AppError::UnsupportedFile(_) => "Only Excel/CSV files allowed".to_string(),
            AppError::FileTooLarge { limit, .. } => {
                format!("The file is larger than the {} byte upload limit.", limit)
            }
            _ => "Parsing failed".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptyDataset => write!(f, "Empty dataset: file has no data rows"),
            AppError::MalformedRow(msg) => write!(f, "Malformed row: {}", msg),
            AppError::UnsupportedFile(msg) => write!(f, "Unsupported file: {}", msg),
            AppError::FileTooLarge { size, limit } => {
                write!(f, "File too large: {} bytes (limit {} bytes)", size, limit)
            }
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_shape_errors_are_user_facing() {
        assert!(AppError::EmptyDataset.is_user_facing());
        assert!(AppError::MalformedRow("row 1".into()).is_user_facing());
        assert!(!AppError::StorageError("down".into()).is_user_facing());
    }

    #[test]
    fn test_empty_dataset_message() {
        assert_eq!(AppError::EmptyDataset.user_message(), "The file has no data rows.");
        assert_eq!(
            AppError::Internal("boom".into()).user_message(),
            "Parsing failed"
        );
    }
}
