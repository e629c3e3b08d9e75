//! College portal client
//!
//! Client-side core of the college website: validated public forms
//! (admissions and partnerships), the admin session guard, the admin
//! dashboard and gallery administration, all talking to the portal backend
//! over HTTP.

pub mod catalog;
pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PortalError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{AdminSession, FileStorage, MemoryStorage, SessionState, SessionStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
