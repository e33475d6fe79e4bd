//! Admin API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::RepoError;
use crate::db::repository::visitor::RECENT_VISITORS_LIMIT;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::client::UserInfo;
use shared::models::{AdminStats, Order, OrderStatusUpdate, VisitorLog};

/// GET /api/admin/users
pub async fn list_users(State(state): State<ServerState>) -> AppResult<Json<Vec<UserInfo>>> {
    let users = state
        .users()
        .list()?
        .iter()
        .map(|u| UserInfo::from_user(u, u.is_admin || state.config.is_admin_email(&u.email)))
        .collect();
    Ok(Json(users))
}

/// GET /api/admin/orders - 全部订单，最新在前
pub async fn list_orders(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.orders().list_all()?))
}

/// PUT /api/admin/orders/{id}/status
pub async fn update_order_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders()
        .update_status(&id, payload.status)
        .map_err(|e| match e {
            RepoError::NotFound(_) => {
                AppError::new(ErrorCode::OrderNotFound).with_detail("id", id.clone())
            }
            other => other.into(),
        })?;

    audit_log!(
        user.id.as_str(),
        "update_status",
        format!("order:{}", order.id),
        format!("{:?}", order.status)
    );

    Ok(Json(order))
}

/// GET /api/admin/visitors - 最近 50 次访问
pub async fn list_visitors(State(state): State<ServerState>) -> AppResult<Json<Vec<VisitorLog>>> {
    Ok(Json(state.visitors().recent(RECENT_VISITORS_LIMIT)?))
}

/// GET /api/admin/stats
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<AdminStats>> {
    let users = state.users().list()?;
    let orders = state.orders().list_all()?;
    Ok(Json(AdminStats::compute(&users, &orders)))
}
