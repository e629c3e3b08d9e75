//! Client settings management
//!
//! Settings are layered: built-in defaults, then an optional `config.toml`
//! (or an explicit file), then `PORTAL_`-prefixed environment variables such
//! as `PORTAL_API__BASE_URL`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::errors::{PortalError, Result};
use crate::validation::attachment::MAX_UPLOAD_BYTES;

/// Main client configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub uploads: UploadConfig,
}

/// Portal backend configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Single base URL every request is resolved against
    pub base_url: String,
    /// Unset means the HTTP client's own default applies
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

/// Where the admin session is persisted between runs
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily log files; stdout only when unset
    pub directory: Option<String>,
    pub file_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadConfig {
    pub max_file_size_bytes: u64,
}

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self> {
        Self::load(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit file, then environment variables
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(config::File::from(path.as_ref()).required(true))
    }

    fn load<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = config::Config::try_from(&Settings::default()).map_err(config_error)?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("PORTAL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error)?;

        settings.try_deserialize().map_err(config_error)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

fn config_error(e: config::ConfigError) -> PortalError {
    PortalError::Config(e.to_string())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8001".to_string(),
                timeout_seconds: None,
                user_agent: format!("college-portal/{}", env!("CARGO_PKG_VERSION")),
            },
            storage: StorageConfig {
                path: ".college-portal/session.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                file_prefix: "college-portal.log".to_string(),
            },
            uploads: UploadConfig {
                max_file_size_bytes: MAX_UPLOAD_BYTES,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.api.timeout_seconds, None);
    }

    #[test]
    fn test_default_upload_limit_is_ten_megabytes() {
        assert_eq!(Settings::default().uploads.max_file_size_bytes, 10 * 1024 * 1024);
    }
}
