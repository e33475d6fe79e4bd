//! 认证授权模块
//!
//! 提供 JWT 认证、密码哈希和中间件：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文
//! - [`require_auth`] - 认证中间件
//! - [`require_admin`] - 管理员检查中间件

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, ROLE_ADMIN, ROLE_CUSTOMER};
pub use middleware::{CurrentUserExt, require_admin, require_auth};
pub use password::{MIN_PASSWORD_LEN, hash_password, verify_dummy_password, verify_password};
