//! User Model

use serde::{Deserialize, Serialize};

/// Customer / administrator profile (without password)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Normalize an email for lookups: trimmed, lowercase
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
