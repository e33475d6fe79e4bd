//! User Repository

use redb::ReadableTable;
use serde::{Deserialize, Serialize};
use shared::models::{User, normalize_email};

use super::{RepoError, RepoResult};
use crate::db::{DocumentStore, USER_EMAILS_TABLE, USERS_TABLE};

/// 持久化的用户记录：档案 + 密码哈希
///
/// 密码哈希只在仓库与登录处理之间流转，从不进入 API 响应。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(flatten)]
    pub user: User,
    pub password_hash: String,
}

#[derive(Clone)]
pub struct UserRepository {
    store: DocumentStore,
}

impl UserRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// 创建用户
    ///
    /// 邮箱索引检查与写入处于同一写事务，重复邮箱返回 `Duplicate`。
    pub fn create(&self, mut user: User, password_hash: String) -> RepoResult<User> {
        user.email = normalize_email(&user.email);

        let txn = self.store.begin_write()?;
        {
            let mut emails = txn.open_table(USER_EMAILS_TABLE)?;
            if emails.get(user.email.as_str())?.is_some() {
                return Err(RepoError::Duplicate(format!(
                    "Email '{}' already registered",
                    user.email
                )));
            }
            emails.insert(user.email.as_str(), user.id.as_str())?;
        }

        let record = StoredUser {
            user: user.clone(),
            password_hash,
        };
        DocumentStore::put_txn(&txn, USERS_TABLE, &user.id, &record)?;
        txn.commit()?;

        Ok(user)
    }

    /// 按邮箱查找 (含密码哈希)
    pub fn find_by_email(&self, email: &str) -> RepoResult<Option<StoredUser>> {
        match self.store.lookup_email(&normalize_email(email))? {
            Some(id) => Ok(self.store.get(USERS_TABLE, &id)?),
            None => Ok(None),
        }
    }

    /// 按 ID 查找
    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let record: Option<StoredUser> = self.store.get(USERS_TABLE, id)?;
        Ok(record.map(|r| r.user))
    }

    /// 所有用户，按邮箱排序
    pub fn list(&self) -> RepoResult<Vec<User>> {
        let records: Vec<StoredUser> = self.store.list(USERS_TABLE)?;
        let mut users: Vec<User> = records.into_iter().map(|r| r.user).collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            name: "Анна".to_string(),
            phone: None,
            is_admin: false,
        }
    }

    #[test]
    fn test_create_and_find() {
        let repo = UserRepository::new(DocumentStore::open_in_memory().unwrap());
        let created = repo.create(user("u1", " Anna@Example.com"), "hash".into()).unwrap();
        assert_eq!(created.email, "anna@example.com");

        let found = repo.find_by_email("ANNA@example.com").unwrap().unwrap();
        assert_eq!(found.user.id, "u1");
        assert_eq!(found.password_hash, "hash");

        assert_eq!(repo.find_by_id("u1").unwrap().unwrap().email, "anna@example.com");
        assert!(repo.find_by_id("u2").unwrap().is_none());
        assert!(repo.find_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let repo = UserRepository::new(DocumentStore::open_in_memory().unwrap());
        repo.create(user("u1", "anna@example.com"), "h".into()).unwrap();

        let err = repo
            .create(user("u2", "ANNA@example.com"), "h".into())
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_password_hash_not_in_user_json() {
        let repo = UserRepository::new(DocumentStore::open_in_memory().unwrap());
        let created = repo.create(user("u1", "a@b.c"), "secret-hash".into()).unwrap();
        let json = serde_json::to_string(&created).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
