//! Order Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// 客户订单路由 (需登录)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", post(handler::create))
        .route("/api/orders/mine", get(handler::list_mine))
}
