//! Data models
//!
//! Plain records exchanged with the portal backend, plus the forms that
//! create them. The backend owns ids, timestamps and uniqueness.

pub mod admin;
pub mod gallery;
pub mod partnership;
pub mod registration;

use serde::{Deserialize, Serialize};

pub use admin::{AdminInfo, DashboardData, DashboardStats, LoginForm, LoginResponse};
pub use gallery::{GalleryImage, GalleryUploadForm};
pub use partnership::{Partnership, PartnershipForm};
pub use registration::{Registration, RegistrationForm};

/// Acknowledgement returned by the public submission endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Backend health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
