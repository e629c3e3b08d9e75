//! Admin session state

use serde::{Deserialize, Serialize};

use crate::models::AdminInfo;

/// A logged-in admin: the opaque bearer token plus who it belongs to
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: String,
    pub admin_info: AdminInfo,
}

impl std::fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSession")
            .field("token", &"<redacted>")
            .field("admin_info", &self.admin_info)
            .finish()
    }
}

/// What the admin area shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing checked yet, or logged out
    #[default]
    Unauthenticated,
    /// A stored token is being verified
    Checking,
    /// No usable token; waiting for credentials
    LoginForm,
    Authenticated(AdminSession),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// Both unauthenticated states render the login form
    pub fn shows_login_form(&self) -> bool {
        matches!(self, SessionState::Unauthenticated | SessionState::LoginForm)
    }

    pub fn session(&self) -> Option<&AdminSession> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Unauthenticated => "unauthenticated",
            SessionState::Checking => "checking",
            SessionState::LoginForm => "login_form",
            SessionState::Authenticated(_) => "authenticated",
        }
    }
}
