//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging helpers
//! for the portal client.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::utils::errors::{PortalError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the log file on drop; keep it alive for as
/// long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| PortalError::Config(format!("Invalid log filter: {e}")))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, &config.file_prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| PortalError::Config(format!("Logging already initialized: {e}")))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log admin actions
pub fn log_admin_action(username: &str, action: &str, target: Option<&str>) {
    warn!(
        admin = username,
        action = action,
        target = target,
        "Admin action performed"
    );
}

/// Log a public form submission outcome
pub fn log_submission(form: &str, success: bool, details: Option<&str>) {
    if success {
        info!(form = form, details = details, "Form submitted");
    } else {
        warn!(form = form, details = details, "Form submission failed");
    }
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str, context: Option<&str>) {
    error!(
        endpoint = endpoint,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log a completed request
pub fn log_request(method: &str, endpoint: &str, status: u16, duration_ms: u64) {
    debug!(
        method = method,
        endpoint = endpoint,
        status = status,
        duration_ms = duration_ms,
        "Request completed"
    );
}
