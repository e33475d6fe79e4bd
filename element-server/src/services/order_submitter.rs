//! 订单提交协作者 - 将配置器生成的订单写入文档存储

use async_trait::async_trait;
use shared::configurator::{OrderSubmitter, SubmitError};
use shared::models::{Order, OrderDetails};
use shared::util::new_document_id;

use crate::db::repository::OrderRepository;

/// 基于 redb 的 [`OrderSubmitter`]
#[derive(Clone)]
pub struct StoreOrderSubmitter {
    orders: OrderRepository,
}

impl StoreOrderSubmitter {
    pub fn new(orders: OrderRepository) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl OrderSubmitter for StoreOrderSubmitter {
    async fn submit(&self, user_id: &str, details: OrderDetails) -> Result<Order, SubmitError> {
        let order = Order::new_request(new_document_id(), user_id, details);

        self.orders.create(&order).map_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, "Failed to persist order");
            SubmitError::new(e.to_string())
        })?;

        tracing::info!(order_id = %order.id, user_id = %user_id, "Order created");
        Ok(order)
    }
}
