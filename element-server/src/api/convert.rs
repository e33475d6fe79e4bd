//! 类型转换模块
//!
//! 将存储层错误转换为 API 错误 (AppError)

use shared::error::{AppError, ErrorCode};

use crate::db::StorageError;
use crate::db::repository::RepoError;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "Storage failure");
        AppError::database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(what) => AppError::with_message(ErrorCode::NotFound, what),
            RepoError::Duplicate(what) => AppError::with_message(ErrorCode::AlreadyExists, what),
            RepoError::Storage(e) => e.into(),
        }
    }
}
