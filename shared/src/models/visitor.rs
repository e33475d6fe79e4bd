//! Visitor Log Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One landing-page visit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VisitorLog {
    pub id: String,
    pub ip: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
}
