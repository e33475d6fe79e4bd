use crate::auth::require_auth;
use crate::core::{Config, ServerState};
use crate::utils::AppError;
use axum::{Router, middleware};
use http::{HeaderName, HeaderValue};
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use tower::Service;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub type OneshotResult =
    Result<http::Response<axum::body::Body>, Box<dyn std::error::Error + Send + Sync>>;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求 ID 生成器 (snowflake)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&shared::util::new_document_id())
            .ok()
            .map(RequestId::new)
    }
}

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        .merge(crate::api::catalog::router())
        .merge(crate::api::configurator::router())
        .merge(crate::api::orders::router())
        .merge(crate::api::visitors::router())
        .merge(crate::api::admin::router())
}

#[derive(Clone, Debug)]
pub struct HttpService {
    config: Config,
    router: Arc<RwLock<Option<Router>>>,
}

impl HttpService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            router: Arc::new(RwLock::new(None)),
        }
    }

    /// Initialize the router with the given server state.
    /// This should be called after ServerState is fully initialized.
    pub fn initialize(&self, state: ServerState) {
        let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

        let app = build_app()
            // JWT 认证中间件 - 在 Router 级别应用，require_auth 内部会跳过公共路由
            .layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .with_state(state)
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new())
            .layer(middleware::from_fn(log_request))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(SetRequestIdLayer::new(request_id, XRequestId));

        let mut router = match self.router.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *router = Some(app);
    }

    pub fn router(&self) -> Option<Router> {
        match self.router.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 不经过网络直接调用路由 (测试和进程内客户端)
    pub async fn oneshot(&self, request: http::Request<axum::body::Body>) -> OneshotResult {
        match self.router() {
            Some(mut router) => match router.call(request).await {
                Ok(response) => Ok(response),
                Err(_) => Err(AppError::internal("Oneshot call failed").into()),
            },
            None => Err(AppError::internal("HttpService not initialized").into()),
        }
    }

    /// 启动 HTTP 服务器，直到 `shutdown_signal` 完成
    pub async fn start_server<F>(
        &self,
        addr: SocketAddr,
        shutdown_signal: F,
    ) -> crate::core::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = self
            .router()
            .ok_or_else(|| anyhow::anyhow!("HttpService not initialized with router"))?;

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            "HTTP server listening on {} (env: {})",
            addr,
            self.config.environment
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
