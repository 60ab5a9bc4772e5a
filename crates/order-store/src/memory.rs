use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Order, OrderDetails, OrderId, Result, store::OrderStore};

#[derive(Debug)]
struct Inner {
    orders: BTreeMap<OrderId, Order>,
    next_id: OrderId,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            orders: BTreeMap::new(),
            next_id: OrderId::first(),
        }
    }
}

/// In-memory order store for tests and local runs.
///
/// IDs are handed out sequentially starting at 1 and never reused,
/// matching an identity column. Clones share the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all orders. The ID sequence is not reset.
    pub async fn clear(&self) {
        self.inner.write().await.orders.clear();
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, details: OrderDetails) -> Result<Order> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id = id.next();

        let order = Order::from_details(id, details);
        inner.orders.insert(id, order.clone());

        Ok(order)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let inner = self.inner.read().await;
        Ok(inner.orders.values().cloned().collect())
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>> {
        let inner = self.inner.read().await;
        Ok(inner.orders.get(&id).cloned())
    }

    async fn find_by_id_and_product_name(
        &self,
        id: OrderId,
        product_name: Option<&str>,
    ) -> Result<Option<Order>> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .get(&id)
            .filter(|order| order.product_name.as_deref() == product_name)
            .cloned())
    }

    async fn update(&self, order: Order) -> Result<Option<Order>> {
        let mut inner = self.inner.write().await;

        match inner.orders.get_mut(&order.id) {
            Some(existing) => {
                *existing = order.clone();
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: OrderId) -> Result<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.orders.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64> {
        let inner = self.inner.read().await;
        Ok(inner.orders.len() as u64)
    }
}
