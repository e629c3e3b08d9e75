//! Admin dashboard
//!
//! Loads the summary, the registrations and the partnerships concurrently.
//! Each section succeeds or fails on its own; a failure in one never blanks
//! the others.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::models::{DashboardData, Partnership, Registration};
use crate::services::api::ApiClient;
use crate::services::auth::SessionGuard;
use crate::services::notification::Notifier;
use crate::services::request::RequestScope;
use crate::state::{ExpansionState, ItemKind};
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging::log_api_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardSection {
    Summary,
    Registrations,
    Partnerships,
}

impl DashboardSection {
    pub fn endpoint(&self) -> &'static str {
        match self {
            DashboardSection::Summary => "/api/admin/dashboard",
            DashboardSection::Registrations => "/api/registrations",
            DashboardSection::Partnerships => "/api/partnerships",
        }
    }
}

impl fmt::Display for DashboardSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardSection::Summary => write!(f, "dashboard data"),
            DashboardSection::Registrations => write!(f, "registrations"),
            DashboardSection::Partnerships => write!(f, "partnerships"),
        }
    }
}

/// What one `load` achieved
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub loaded: Vec<DashboardSection>,
    pub failed: Vec<(DashboardSection, PortalError)>,
}

impl LoadOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    fn record<T>(&mut self, section: DashboardSection, result: Result<T>, apply: impl FnOnce(T)) {
        match result {
            Ok(value) => {
                apply(value);
                self.loaded.push(section);
            }
            Err(e) => self.failed.push((section, e)),
        }
    }
}

/// Everything the dashboard currently shows
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub summary: Option<DashboardData>,
    pub registrations: Vec<Registration>,
    pub partnerships: Vec<Partnership>,
    pub expansion: ExpansionState,
    pub loading: bool,
}

pub struct DashboardService {
    api: ApiClient,
    session: Arc<SessionGuard>,
    notifier: Arc<dyn Notifier>,
    scope: RequestScope,
    view: Mutex<DashboardView>,
}

impl DashboardService {
    pub fn new(api: ApiClient, session: Arc<SessionGuard>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            session,
            notifier,
            scope: RequestScope::new(),
            view: Mutex::new(DashboardView::default()),
        }
    }

    fn view_mut(&self) -> MutexGuard<'_, DashboardView> {
        self.view.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Fetch all three sections at once.
    ///
    /// Sections that load replace what was shown; failed or cancelled ones
    /// keep their previous contents. Expansion state is left alone.
    pub async fn load(&self) -> Result<LoadOutcome> {
        if !self.session.state().is_authenticated() {
            return Err(PortalError::NotAuthenticated);
        }

        self.view_mut().loading = true;
        let (summary, registrations, partnerships) = tokio::join!(
            self.fetch::<DashboardData>(DashboardSection::Summary),
            self.fetch::<Vec<Registration>>(DashboardSection::Registrations),
            self.fetch::<Vec<Partnership>>(DashboardSection::Partnerships),
        );

        let mut outcome = LoadOutcome::default();
        {
            let mut view = self.view_mut();
            outcome.record(DashboardSection::Summary, summary, |data| view.summary = Some(data));
            outcome.record(DashboardSection::Registrations, registrations, |items| {
                view.registrations = items
            });
            outcome.record(DashboardSection::Partnerships, partnerships, |items| {
                view.partnerships = items
            });
            view.loading = false;
        }

        info!(
            loaded = outcome.loaded.len(),
            failed = outcome.failed.len(),
            "Dashboard load finished"
        );
        Ok(outcome)
    }

    async fn fetch<T: DeserializeOwned>(&self, section: DashboardSection) -> Result<T> {
        let api = &self.api;
        let endpoint = section.endpoint();
        let request = self
            .session
            .authorized(|token| async move { api.get_json::<T>(endpoint, Some(&token)).await });

        let result = self.scope.run(request).await;
        if let Err(e) = &result {
            self.report_failure(section, e);
        }
        result
    }

    fn report_failure(&self, section: DashboardSection, error: &PortalError) {
        match error {
            PortalError::Cancelled => debug!(section = %section, "Dashboard request cancelled"),
            // The session guard has already told the user
            PortalError::Unauthorized | PortalError::NotAuthenticated => {}
            _ => {
                log_api_error(section.endpoint(), &error.to_string(), None);
                self.notifier.error(&error.user_message(&format!("Failed to load {section}")));
            }
        }
    }

    pub fn view(&self) -> DashboardView {
        self.view_mut().clone()
    }

    pub fn summary(&self) -> Option<DashboardData> {
        self.view_mut().summary.clone()
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.view_mut().registrations.clone()
    }

    pub fn partnerships(&self) -> Vec<Partnership> {
        self.view_mut().partnerships.clone()
    }

    /// Flip an item between summary and detail; returns whether it is now expanded
    pub fn toggle_expanded(&self, kind: ItemKind, id: &str) -> bool {
        self.view_mut().expansion.toggle(kind, id)
    }

    pub fn is_expanded(&self, kind: ItemKind, id: &str) -> bool {
        self.view_mut().expansion.is_expanded(kind, id)
    }

    /// Where a record's uploaded document can be downloaded
    pub fn document_url(&self, filename: &str) -> String {
        self.api.upload_url(filename)
    }

    pub fn cancel_pending(&self) {
        self.scope.cancel_pending();
    }

    /// Abort requests in flight and stop issuing new ones
    pub fn close(&self) {
        self.scope.close();
    }
}
