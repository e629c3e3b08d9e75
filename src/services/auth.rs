//! Admin session guard
//!
//! Owns the admin session: restores it from storage on startup, logs in and
//! out, and ends it when the backend rejects the token. State changes are
//! published on a `watch` channel so views can follow them.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::models::{AdminInfo, LoginForm, LoginResponse};
use crate::services::api::ApiClient;
use crate::services::notification::Notifier;
use crate::state::{AdminSession, SessionState, SessionStorage, ADMIN_INFO_KEY, ADMIN_TOKEN_KEY};
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging::log_admin_action;
use crate::validation::Validate;

pub const LOGIN_SUCCESS: &str = "Login successful! Welcome to WHIBC Admin Dashboard.";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";
pub const LOGGED_OUT: &str = "Logged out successfully";

pub struct SessionGuard {
    api: ApiClient,
    storage: Arc<dyn SessionStorage>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<SessionState>,
}

impl SessionGuard {
    pub fn new(api: ApiClient, storage: Arc<dyn SessionStorage>, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self { api, storage, notifier, state }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn session(&self) -> Option<AdminSession> {
        self.state.borrow().session().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().session().map(|s| s.token.clone())
    }

    /// Pick up a previously stored session and confirm it with the backend.
    ///
    /// Without a stored token this goes straight to the login form. A token
    /// the backend refuses is discarded.
    pub async fn restore(&self) -> SessionState {
        let Some(session) = self.stored_session() else {
            self.state.send_replace(SessionState::LoginForm);
            return SessionState::LoginForm;
        };

        self.state.send_replace(SessionState::Checking);
        debug!(username = %session.admin_info.username, "Verifying stored admin token");

        match self.api.post_empty("/api/admin/verify-token", Some(&session.token)).await {
            Ok(()) => {
                // A logout while verifying wins over the stale result
                self.state.send_if_modified(|state| {
                    if *state == SessionState::Checking {
                        *state = SessionState::Authenticated(session.clone());
                        true
                    } else {
                        false
                    }
                });
                info!(username = %session.admin_info.username, "Admin session restored");
            }
            Err(e) => {
                warn!(error = %e, "Stored admin token could not be verified");
                self.state.send_if_modified(|state| {
                    if *state == SessionState::Checking {
                        self.clear_storage();
                        *state = SessionState::LoginForm;
                        true
                    } else {
                        false
                    }
                });
            }
        }

        self.state()
    }

    fn stored_session(&self) -> Option<AdminSession> {
        let token = match self.storage.get_item(ADMIN_TOKEN_KEY) {
            Ok(Some(token)) if !token.trim().is_empty() => token,
            Ok(_) => return None,
            Err(e) => {
                warn!(error = %e, "Failed to read stored admin token");
                return None;
            }
        };

        let admin_info = match self.storage.get_item(ADMIN_INFO_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<AdminInfo>(&raw).ok(),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read stored admin info");
                None
            }
        };

        match admin_info {
            Some(admin_info) => Some(AdminSession { token, admin_info }),
            None => {
                warn!("Stored admin token has no usable admin info; discarding");
                self.clear_storage();
                None
            }
        }
    }

    /// Submit credentials. On success the session is stored, the form is
    /// cleared and the guard becomes authenticated.
    ///
    /// Field errors come back as `PortalError::Validation` without a toast;
    /// backend refusals are toasted with the backend's message.
    pub async fn login(&self, form: &mut LoginForm) -> Result<AdminSession> {
        form.validate()?;

        let response: LoginResponse = match self.api.post_json("/api/admin/login", &*form, None).await {
            Ok(response) => response,
            Err(e) => {
                warn!(username = %form.username, error = %e, "Admin login failed");
                self.notifier.error(&e.user_message(LOGIN_FAILED));
                return Err(e);
            }
        };

        let session = AdminSession {
            token: response.access_token,
            admin_info: response.admin_info,
        };
        let info_json = serde_json::to_string(&session.admin_info)?;

        let mut stored = Ok(());
        self.state.send_modify(|state| {
            stored = self
                .storage
                .set_item(ADMIN_TOKEN_KEY, &session.token)
                .and_then(|_| self.storage.set_item(ADMIN_INFO_KEY, &info_json));
            *state = SessionState::Authenticated(session.clone());
        });
        if let Err(e) = stored {
            // The session still works for this process; it just won't survive a restart
            warn!(error = %e, "Failed to persist admin session");
        }

        log_admin_action(&session.admin_info.username, "login", None);
        self.notifier.success(LOGIN_SUCCESS);
        *form = LoginForm::default();
        Ok(session)
    }

    /// Unconditionally end the session
    pub fn logout(&self) {
        let previous = self.state.send_replace(SessionState::Unauthenticated);
        self.clear_storage();
        if let Some(session) = previous.session() {
            log_admin_action(&session.admin_info.username, "logout", None);
        }
        self.notifier.info(LOGGED_OUT);
    }

    /// End the session because the backend rejected `rejected_token`.
    ///
    /// Only the first caller holding the current token has any effect, so a
    /// burst of concurrent 401s logs out and notifies exactly once. Returns
    /// whether this call performed the logout.
    pub fn expire(&self, rejected_token: &str) -> bool {
        let expired = self.state.send_if_modified(|state| match state {
            SessionState::Authenticated(session) if session.token == rejected_token => {
                self.clear_storage();
                *state = SessionState::Unauthenticated;
                true
            }
            _ => false,
        });

        if expired {
            warn!("Admin token rejected by backend; session ended");
            self.notifier.error(SESSION_EXPIRED);
        }
        expired
    }

    /// Run an authenticated call with the current token, ending the session
    /// if the backend answers 401.
    pub async fn authorized<T, F, Fut>(&self, call: F) -> Result<T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let token = self.token().ok_or(PortalError::NotAuthenticated)?;
        let result = call(token.clone()).await;
        if matches!(&result, Err(e) if e.is_unauthorized()) {
            self.expire(&token);
        }
        result
    }

    fn clear_storage(&self) {
        for key in [ADMIN_TOKEN_KEY, ADMIN_INFO_KEY] {
            if let Err(e) = self.storage.remove_item(key) {
                warn!(key = key, error = %e, "Failed to clear stored session");
            }
        }
    }
}
