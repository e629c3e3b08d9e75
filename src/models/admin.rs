//! Admin session and dashboard models

use serde::{Deserialize, Serialize};

use super::{Partnership, Registration};
use crate::validation::{Rule, Validate, ValidationErrors};

/// Who is logged in, as reported by the backend at login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminInfo {
    pub username: String,
    pub role: String,
}

/// Admin login form. Credentials are only ever checked by the backend.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .check(
                "username",
                &self.username,
                &[
                    Rule::Required("Username is required"),
                    Rule::MinLength(3, "Username must be at least 3 characters"),
                ],
            )
            .check(
                "password",
                &self.password,
                &[
                    Rule::Required("Password is required"),
                    Rule::MinLength(6, "Password must be at least 6 characters"),
                ],
            );
        errors.into_result()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub admin_info: AdminInfo,
}

/// Summary counts shown at the top of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_registrations: u64,
    #[serde(default)]
    pub total_partnerships: u64,
    #[serde(default)]
    pub total_gallery: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    #[serde(default)]
    pub recent_registrations: Vec<Registration>,
    #[serde(default)]
    pub recent_partnerships: Vec<Partnership>,
}
