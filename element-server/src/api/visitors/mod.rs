//! 访客记录路由
//!
//! POST 公开 (落地页调用)；列表在管理端 `/api/admin/visitors`。

use axum::{Json, Router, extract::State, routing::post};
use chrono::Utc;
use http::HeaderMap;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::MAX_USER_AGENT_LEN;
use shared::models::VisitorLog;
use shared::util::new_document_id;

const UNKNOWN: &str = "unknown";

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/visitors", post(record_visit))
}

/// 客户端 IP：X-Forwarded-For 第一跳，其次 X-Real-IP
fn client_ip(headers: &HeaderMap) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    forwarded
        .or_else(real_ip)
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn user_agent(headers: &HeaderMap) -> String {
    headers
        .get(http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|ua| ua.chars().take(MAX_USER_AGENT_LEN).collect())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// POST /api/visitors
async fn record_visit(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> AppResult<Json<VisitorLog>> {
    let visit = VisitorLog {
        id: new_document_id(),
        ip: client_ip(&headers),
        user_agent: user_agent(&headers),
        timestamp: Utc::now(),
    };
    state.visitors().record(&visit)?;

    tracing::debug!(ip = %visit.ip, "Visitor recorded");
    Ok(Json(visit))
}
