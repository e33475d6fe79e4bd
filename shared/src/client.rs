//! Client-related types shared between server and site
//!
//! Request/response bodies of the element-server HTTP API.

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryTab;
use crate::configurator::{ConfigUpdate, OrderDetailPayload, PreviewProjection, SelectionSnapshot};
use crate::models::{FinishCategory, FinishOption, MaterialOption, User};

pub use crate::error::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login / register response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_admin: bool,
}

impl UserInfo {
    pub fn from_user(user: &User, is_admin: bool) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            is_admin,
        }
    }
}

// =============================================================================
// Configurator API DTOs
// =============================================================================

/// Catalog as served to the configurator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub materials: Vec<MaterialOption>,
    pub finishes: Vec<FinishOption>,
    pub categories: Vec<CategoryTab>,
}

/// Selection to resolve, optionally with a tab switch and field edits
///
/// Edits apply after the tab switch, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    pub selection: SelectionSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<FinishCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<ConfigUpdate>,
}

/// Derived views of a selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub selection: SelectionSnapshot,
    pub visible_finishes: Vec<FinishOption>,
    pub preview: PreviewProjection,
    pub payload: OrderDetailPayload,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Configurator order submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub comment: String,
    /// Cookie consent given on the site
    #[serde(default)]
    pub consent: bool,
    pub selection: SelectionSnapshot,
}
