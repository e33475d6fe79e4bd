//! 配置器路由 (公共)
//!
//! 根据客户端的选择快照计算可见选项、预览和订单载荷，
//! 站点与服务器使用同一套推导逻辑。

use axum::{Json, Router, extract::State, routing::post};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::client::{ResolveRequest, ResolveResponse};
use shared::configurator::Selection;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/configurator/resolve", post(resolve))
}

/// POST /api/configurator/resolve
async fn resolve(
    State(state): State<ServerState>,
    Json(req): Json<ResolveRequest>,
) -> AppResult<Json<ResolveResponse>> {
    let mut selection = Selection::from_snapshot(state.catalog.clone(), &req.selection)?;

    if let Some(category) = req.category {
        selection.set_category(category);
    }
    for update in req.updates {
        selection.update_configuration(update);
    }

    Ok(Json(ResolveResponse {
        selection: selection.snapshot(),
        visible_finishes: selection
            .visible_finish_options()
            .into_iter()
            .cloned()
            .collect(),
        preview: selection.preview(),
        payload: selection.order_payload(),
    }))
}
