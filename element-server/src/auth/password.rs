//! 密码哈希 (argon2)

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use std::sync::OnceLock;

use crate::AppError;

/// 最小密码长度
pub const MIN_PASSWORD_LEN: usize = 6;

/// 生成 argon2 密码哈希
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// 校验密码；哈希格式损坏视为内部错误
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// 未知邮箱时使用的占位哈希，首次使用时生成
static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// 对占位哈希执行一次校验，使未知邮箱与错误密码耗时一致
pub fn verify_dummy_password(password: &str) {
    let hash = DUMMY_HASH.get_or_init(|| hash_password("element-placeholder").ok());
    if let Some(hash) = hash {
        let _ = verify_password(password, hash);
    }
}
