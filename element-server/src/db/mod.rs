//! 文档存储 (redb)
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `users` | `user_id` | `StoredUser` | 用户档案 + 密码哈希 |
//! | `user_emails` | `email` | `user_id` | 邮箱唯一索引 |
//! | `orders` | `order_id` | `Order` | 订单 |
//! | `visitors` | `visitor_id` | `VisitorLog` | 访客记录 |
//!
//! 所有值均为 JSON 序列化后的字节。

pub mod repository;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// JSON 文档表类型
pub type DocTable = TableDefinition<'static, &'static str, &'static [u8]>;

/// 用户表: key = user_id, value = JSON StoredUser
pub(crate) const USERS_TABLE: DocTable = TableDefinition::new("users");

/// 邮箱索引: key = 规范化邮箱, value = user_id
pub(crate) const USER_EMAILS_TABLE: TableDefinition<&str, &str> =
    TableDefinition::new("user_emails");

/// 订单表: key = order_id, value = JSON Order
pub(crate) const ORDERS_TABLE: DocTable = TableDefinition::new("orders");

/// 访客表: key = visitor_id, value = JSON VisitorLog
pub(crate) const VISITORS_TABLE: DocTable = TableDefinition::new("visitors");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// 文档存储
#[derive(Clone)]
pub struct DocumentStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore").finish_non_exhaustive()
    }
}

impl DocumentStore {
    /// Open or create the database at the given path
    ///
    /// redb 默认 `Durability::Immediate`，`commit()` 返回即持久化。
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests and demos)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create all tables if they don't exist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(USERS_TABLE)?;
            let _ = write_txn.open_table(USER_EMAILS_TABLE)?;
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(VISITORS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Begin a write transaction
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    /// 写入单个文档 (独立事务)
    pub fn put<T: Serialize>(
        &self,
        table: DocTable,
        key: &str,
        value: &T,
    ) -> StorageResult<()> {
        let txn = self.begin_write()?;
        Self::put_txn(&txn, table, key, value)?;
        txn.commit()?;
        Ok(())
    }

    /// 在已有事务中写入文档
    pub fn put_txn<T: Serialize>(
        txn: &WriteTransaction,
        table: DocTable,
        key: &str,
        value: &T,
    ) -> StorageResult<()> {
        let mut table = txn.open_table(table)?;
        let bytes = serde_json::to_vec(value)?;
        table.insert(key, bytes.as_slice())?;
        Ok(())
    }

    /// 按 key 读取文档
    pub fn get<T: DeserializeOwned>(
        &self,
        table: DocTable,
        key: &str,
    ) -> StorageResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(table)?;

        match table.get(key)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// 读取整张表
    pub fn list<T: DeserializeOwned>(
        &self,
        table: DocTable,
    ) -> StorageResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(table)?;

        let mut docs = Vec::new();
        for result in table.iter()? {
            let (_key, value) = result?;
            docs.push(serde_json::from_slice(value.value())?);
        }
        Ok(docs)
    }

    /// 查询邮箱索引
    pub fn lookup_email(&self, email: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(USER_EMAILS_TABLE)?;
        Ok(table.get(email)?.map(|guard| guard.value().to_string()))
    }
}
