//! ELEMENT Server - 定制木盒配置器与订单后端
//!
//! # 架构概述
//!
//! - **配置器** (`shared::configurator`): 木材 × 内衬选择、预览投影、订单载荷推导
//! - **存储** (`db`): 嵌入式 redb 文档存储
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! element-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── auth/          # JWT 认证、密码、中间件
//! ├── services/      # HTTP 服务、订单提交
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志、校验
//! └── db/            # 文档存储和仓库
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use db::DocumentStore;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Audit log helper - records business operations under target "audit"
///
/// ```ignore
/// audit_log!("user123", "create", "order:456");
/// audit_log!("user123", "update_status", "order:456", "Completed");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($user_id:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            user_id = $user_id,
            action = $action,
            resource = $resource,
            "AUDIT"
        );
    };
    ($user_id:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            user_id = $user_id,
            action = $action,
            resource = $resource,
            details = $details,
            "AUDIT"
        );
    };
}

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境：日志 (控制台 + 可选文件)
///
/// `.env` 需在加载 [`Config`] 之前由 [`load_dotenv`] 读取。
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )
}

/// 加载 `.env` (不存在时忽略)
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

pub fn print_banner() {
    println!(
        r#"
    ________    ________  ___________   ________
   / ____/ /   / ____/  |/  / ____/ | / /_  __/
  / __/ / /   / __/ / /|_/ / __/ /  |/ / / /
 / /___/ /___/ /___/ /  / / /___/ /|  / / /
/_____/_____/_____/_/  /_/_____/_/ |_/ /_/
    "#
    );
}
