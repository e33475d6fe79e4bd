//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::user::User;
use crate::configurator::OrderDetailPayload;

/// Summary line stored on every configurator order
pub const BESPOKE_ORDER_ITEMS: &str = "Индивидуальный заказ";

/// Contact method recorded for configurator requests
pub const CONTACT_METHOD_REQUEST: &str = "request";

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

/// Contact block of the lead form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default = "default_contact_method")]
    pub contact_method: String,
}

fn default_contact_method() -> String {
    CONTACT_METHOD_REQUEST.to_string()
}

impl ContactDetails {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            comment: String::new(),
            contact_method: default_contact_method(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Stored order details: contact block + configurator payload, one flat object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub contact: ContactDetails,
    #[serde(flatten)]
    pub configuration: OrderDetailPayload,
}

/// Order document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: String,
    pub details: OrderDetails,
}

impl Order {
    /// New pending order for a configurator request
    pub fn new_request(id: impl Into<String>, user_id: impl Into<String>, details: OrderDetails) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            date: Utc::now(),
            status: OrderStatus::Pending,
            items: BESPOKE_ORDER_ITEMS.to_string(),
            details,
        }
    }
}

/// Update order status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Back-office dashboard figures
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub completed_orders: usize,
    pub total_users: usize,
    pub users_without_orders: usize,
    /// Share of users with at least one order, rounded percent
    pub conversion_percent: u32,
}

impl AdminStats {
    pub fn compute(users: &[User], orders: &[Order]) -> Self {
        let customers: HashSet<&str> = orders.iter().map(|o| o.user_id.as_str()).collect();
        let count_status = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

        let conversion_percent = if users.is_empty() {
            0
        } else {
            ((customers.len() as f64 / users.len() as f64) * 100.0).round() as u32
        };

        Self {
            total_orders: orders.len(),
            pending_orders: count_status(OrderStatus::Pending),
            completed_orders: count_status(OrderStatus::Completed),
            total_users: users.len(),
            users_without_orders: users.len().saturating_sub(customers.len()),
            conversion_percent,
        }
    }
}
