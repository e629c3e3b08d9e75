//! Configuration validation module
//!
//! Checks run once at startup so that a bad base URL or log level fails
//! loudly instead of surfacing as a confusing request error later.

use super::Settings;
use crate::utils::errors::{PortalError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;
    validate_upload_config(&settings.uploads)?;
    Ok(())
}

fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(PortalError::Config("API base URL is required".to_string()));
    }

    let url = url::Url::parse(&config.base_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(PortalError::Config(format!(
            "API base URL must use http or https, got {}",
            url.scheme()
        )));
    }

    if config.timeout_seconds == Some(0) {
        return Err(PortalError::Config(
            "API timeout must be greater than 0 when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.path.trim().is_empty() {
        return Err(PortalError::Config("Session storage path is required".to_string()));
    }

    Ok(())
}

fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PortalError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PortalError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

fn validate_upload_config(config: &super::UploadConfig) -> Result<()> {
    if config.max_file_size_bytes == 0 {
        return Err(PortalError::Config(
            "Upload size limit must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
