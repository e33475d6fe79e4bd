use std::path::PathBuf;
use std::sync::Arc;

use shared::catalog::{Catalog, CatalogProvider, JsonFileCatalog, StandardCatalog};

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::DocumentStore;
use crate::db::repository::{OrderRepository, UserRepository, VisitorRepository};
use crate::services::{HttpService, StoreOrderSubmitter};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | DocumentStore | 文档存储 (redb) |
/// | catalog | Arc<Catalog> | 已校验的产品目录 |
/// | http | HttpService | HTTP 服务 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 文档存储
    pub store: DocumentStore,
    /// 产品目录
    pub catalog: Arc<Catalog>,
    /// HTTP 服务
    pub http: HttpService,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 使用已打开的存储和目录构造状态，并初始化路由
    pub fn new(config: Config, store: DocumentStore, catalog: Catalog) -> Self {
        let http = HttpService::new(config.clone());
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self {
            config,
            store,
            catalog: Arc::new(catalog),
            http: http.clone(),
            jwt_service,
        };

        // Router needs the finished state
        http.initialize(state.clone());

        state
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录
    /// 2. 数据库 (work_dir/element.redb)
    /// 3. 产品目录 (CATALOG_PATH 或内置目录)
    /// 4. 各服务 (HTTP, JWT)
    pub fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let store = DocumentStore::open(config.database_path())?;
        let catalog = load_catalog(config.catalog_path.clone())?;

        tracing::info!(
            materials = catalog.materials().len(),
            finishes = catalog.finishes().len(),
            "Catalog loaded"
        );

        Ok(Self::new(config.clone(), store, catalog))
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.store.clone())
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.store.clone())
    }

    pub fn visitors(&self) -> VisitorRepository {
        VisitorRepository::new(self.store.clone())
    }

    /// 订单提交协作者
    pub fn order_submitter(&self) -> StoreOrderSubmitter {
        StoreOrderSubmitter::new(self.orders())
    }
}

fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    let provider: Box<dyn CatalogProvider> = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog from file");
            Box::new(JsonFileCatalog::new(path))
        }
        None => Box::new(StandardCatalog),
    };
    Ok(provider.load()?)
}
