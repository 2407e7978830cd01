use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::application::use_cases::preview_sampler::DEFAULT_PREVIEW_LIMIT;
use crate::domain::error::{AppError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "sheet-insight.toml";
pub const ENV_PREFIX: &str = "SHEET_INSIGHT_";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rows kept in the profile preview (default: 10)
    pub preview_limit: usize,

    /// Largest accepted upload in bytes (default: 10 MiB)
    pub max_upload_bytes: usize,

    /// Accepted file extensions, lowercase without the dot
    pub allowed_extensions: Vec<String>,

    /// CSV delimiter; auto-detected when unset
    pub csv_delimiter: Option<char>,

    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            max_upload_bytes: 10 * 1024 * 1024,
            allowed_extensions: vec!["xlsx".to_string(), "xls".to_string(), "csv".to_string()],
            csv_delimiter: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load defaults, then the TOML file, then `SHEET_INSIGHT_*` env vars.
    ///
    /// Without an explicit path, `sheet-insight.toml` in the working
    /// directory is used when it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if path.is_some() && !file.exists() {
            return Err(AppError::ConfigError(format!(
                "config file not found: {}",
                file.display()
            )));
        }

        let config: AppConfig = Self::figment(&file).extract()?;
        config.validate()?;
        Ok(config)
    }

    fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(AppError::ConfigError(
                "max_upload_bytes must be > 0".to_string(),
            ));
        }
        if self.allowed_extensions.is_empty() {
            return Err(AppError::ConfigError(
                "allowed_extensions must not be empty".to_string(),
            ));
        }
        if let Some(delimiter) = self.csv_delimiter {
            if !delimiter.is_ascii() {
                return Err(AppError::ConfigError(
                    "csv_delimiter must be an ASCII character".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn is_extension_allowed(&self, extension: &str) -> bool {
        let extension = extension.to_ascii_lowercase();
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
    }
}
