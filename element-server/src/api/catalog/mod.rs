//! 产品目录路由 (公共)

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use shared::client::CatalogResponse;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/catalog", get(get_catalog))
}

/// GET /api/catalog - 木材、内衬与分类标签
async fn get_catalog(State(state): State<ServerState>) -> Json<CatalogResponse> {
    let catalog = &state.catalog;
    Json(CatalogResponse {
        materials: catalog.materials().to_vec(),
        finishes: catalog.finishes().to_vec(),
        categories: catalog.category_tabs(),
    })
}
