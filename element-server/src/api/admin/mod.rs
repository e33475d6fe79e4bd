//! 管理端路由
//!
//! 全部路由位于 `require_admin` 之后。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/users", get(handler::list_users))
        .route("/orders", get(handler::list_orders))
        .route("/orders/{id}/status", put(handler::update_order_status))
        .route("/visitors", get(handler::list_visitors))
        .route("/stats", get(handler::stats))
        .layer(middleware::from_fn(require_admin))
}
