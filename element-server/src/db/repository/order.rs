//! Order Repository

use redb::ReadableTable;
use shared::models::{Order, OrderStatus};

use super::{RepoError, RepoResult};
use crate::db::{DocumentStore, ORDERS_TABLE};

#[derive(Clone)]
pub struct OrderRepository {
    store: DocumentStore,
}

impl OrderRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// 保存新订单
    pub fn create(&self, order: &Order) -> RepoResult<()> {
        self.store.put(ORDERS_TABLE, &order.id, order)?;
        Ok(())
    }

    /// 某用户的订单，最新在前
    pub fn list_by_user(&self, user_id: &str) -> RepoResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .list_all()?
            .into_iter()
            .filter(|o| o.user_id == user_id)
            .collect();
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(orders)
    }

    /// 全部订单，最新在前
    pub fn list_all(&self) -> RepoResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.store.list(ORDERS_TABLE)?;
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(orders)
    }

    /// 更新订单状态
    pub fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let txn = self.store.begin_write()?;
        let updated = {
            let mut table = txn.open_table(ORDERS_TABLE)?;
            let mut order: Order = match table.get(id)? {
                Some(value) => serde_json::from_slice(value.value())?,
                None => return Err(RepoError::NotFound(format!("Order {}", id))),
            };
            order.status = status;
            let bytes = serde_json::to_vec(&order)?;
            table.insert(id, bytes.as_slice())?;
            order
        };
        txn.commit()?;
        Ok(updated)
    }
}
