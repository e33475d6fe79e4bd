use std::path::PathBuf;

use crate::auth::{JwtConfig, JwtError};

/// Default back-office account
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@element.com";

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | ADMIN_EMAILS | admin@element.com | 管理员邮箱 (逗号分隔) |
/// | CATALOG_PATH | (内置目录) | 自定义目录 JSON 文件 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录，未设置时只输出到终端 |
/// | JWT_SECRET | (开发环境随机生成) | JWT 密钥，至少 32 字符 |
/// | JWT_EXPIRATION_MINUTES | 1440 | 令牌有效期 |
/// | JWT_ISSUER | element-server | 令牌签发者 |
/// | JWT_AUDIENCE | element-site | 令牌受众 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/element HTTP_PORT=8080 cargo run -p element-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 管理员邮箱 (已规范化为小写)
    pub admin_emails: Vec<String>,
    /// 自定义目录文件
    pub catalog_path: Option<PathBuf>,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值。仅 JWT 密钥配置错误会失败。
    pub fn from_env() -> Result<Self, JwtError> {
        Ok(Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::from_env()?,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_emails: parse_admin_emails(
                &std::env::var("ADMIN_EMAILS").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.into()),
            ),
            catalog_path: std::env::var("CATALOG_PATH").ok().map(PathBuf::from),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        })
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Result<Self, JwtError> {
        let mut config = Self::from_env()?;
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        Ok(config)
    }

    /// 数据库文件路径
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("element.redb")
    }

    /// 邮箱是否在管理员名单中
    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = shared::models::normalize_email(email);
        self.admin_emails.iter().any(|e| *e == email)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn parse_admin_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(shared::models::normalize_email)
        .filter(|e| !e.is_empty())
        .collect()
}
