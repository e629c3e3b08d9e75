//! Services module
//!
//! Client-side business logic on top of the portal backend

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod forms;
pub mod gallery;
pub mod notification;
pub mod request;

pub use api::ApiClient;
pub use auth::SessionGuard;
pub use dashboard::{DashboardSection, DashboardService, DashboardView, LoadOutcome};
pub use forms::FormService;
pub use gallery::{Confirmation, DeleteOutcome, GalleryService};
pub use notification::{LogNotifier, Notifier, RecordingNotifier, Toast, ToastKind};
pub use request::RequestScope;

use std::sync::Arc;

use crate::config::Settings;
use crate::models::HealthStatus;
use crate::state::{FileStorage, SessionStorage};
use crate::utils::errors::Result;

/// Service factory for creating and wiring all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub api: ApiClient,
    pub session: Arc<SessionGuard>,
    pub forms: Arc<FormService>,
    pub dashboard: Arc<DashboardService>,
    pub gallery: Arc<GalleryService>,
}

impl ServiceFactory {
    /// Create all services sharing one client, session and notifier
    pub fn new(settings: &Settings, storage: Arc<dyn SessionStorage>, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let api = ApiClient::new(settings)?;
        let max_upload = settings.uploads.max_file_size_bytes;

        let session = Arc::new(SessionGuard::new(api.clone(), storage, notifier.clone()));
        let forms = Arc::new(FormService::new(api.clone(), notifier.clone(), max_upload));
        let dashboard = Arc::new(DashboardService::new(api.clone(), session.clone(), notifier.clone()));
        let gallery = Arc::new(GalleryService::new(api.clone(), session.clone(), notifier, max_upload));

        Ok(Self { api, session, forms, dashboard, gallery })
    }

    /// Services backed by the on-disk session file, reporting through the log
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let storage = Arc::new(FileStorage::new(&settings.storage.path));
        Self::new(settings, storage, Arc::new(LogNotifier))
    }

    pub async fn health_check(&self) -> Result<HealthStatus> {
        self.api.get_json("/api/health", None).await
    }

    /// Abort every request in flight and refuse new ones
    pub fn shutdown(&self) {
        self.forms.close();
        self.dashboard.close();
        self.gallery.close();
    }
}
