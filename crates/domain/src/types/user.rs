//! Auth collaborator types
//!
//! Sessions and profile updates are owned by the hosted auth service; these
//! records only mirror what it returns.

use serde::{Deserialize, Serialize};

/// Sign-in / sign-up form input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Authenticated session delivered by the hosted auth service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    /// Local part of the email, shown in greetings.
    pub display_name: String,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl Session {
    pub fn display_name_from_email(email: &str) -> String {
        email.split('@').next().unwrap_or(email).to_string()
    }
}

/// Profile fields persisted to the hosted auth service as user metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub timezone: String,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_notifications() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_email_local_part() {
        assert_eq!(Session::display_name_from_email("sarah@company.com"), "sarah");
        assert_eq!(Session::display_name_from_email("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn profile_notifications_default_on() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"name":"Sarah","timezone":"UTC"}"#).unwrap();
        assert!(update.notifications);
        assert!(update.phone.is_none());
    }
}
