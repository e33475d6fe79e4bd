//! Repository Module
//!
//! 基于 [`DocumentStore`](crate::db::DocumentStore) 的各表 CRUD 操作。

pub mod order;
pub mod user;
pub mod visitor;

pub use order::OrderRepository;
pub use user::{StoredUser, UserRepository};
pub use visitor::VisitorRepository;

use crate::db::StorageError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

macro_rules! impl_from_redb {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RepoError {
                fn from(err: $ty) -> Self {
                    RepoError::Storage(StorageError::from(err))
                }
            }
        )*
    };
}

impl_from_redb!(
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
    serde_json::Error,
);
