//! Visitor Repository

use shared::models::VisitorLog;

use super::RepoResult;
use crate::db::{DocumentStore, VISITORS_TABLE};

/// 管理端展示的访客记录条数
pub const RECENT_VISITORS_LIMIT: usize = 50;

#[derive(Clone)]
pub struct VisitorRepository {
    store: DocumentStore,
}

impl VisitorRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    pub fn record(&self, visit: &VisitorLog) -> RepoResult<()> {
        self.store.put(VISITORS_TABLE, &visit.id, visit)?;
        Ok(())
    }

    /// 最近的访问，最新在前
    pub fn recent(&self, limit: usize) -> RepoResult<Vec<VisitorLog>> {
        let mut visits: Vec<VisitorLog> = self.store.list(VISITORS_TABLE)?;
        visits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        visits.truncate(limit);
        Ok(visits)
    }
}
