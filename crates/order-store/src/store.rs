use async_trait::async_trait;

use crate::{Order, OrderDetails, OrderId, Result};

/// Core trait for order record stores.
///
/// A store persists orders keyed by an integer ID it assigns itself.
/// Each method is a single read or write; callers compose them.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order and returns it with its newly assigned ID.
    async fn insert(&self, details: OrderDetails) -> Result<Order>;

    /// Returns every stored order in ascending ID order.
    async fn find_all(&self) -> Result<Vec<Order>>;

    /// Looks up an order by ID.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>>;

    /// Looks up an order matching both ID and product name exactly.
    ///
    /// A `None` name matches only orders whose stored name is null.
    async fn find_by_id_and_product_name(
        &self,
        id: OrderId,
        product_name: Option<&str>,
    ) -> Result<Option<Order>>;

    /// Replaces the stored fields of `order.id` with those of `order`.
    ///
    /// Returns None if no order with that ID exists anymore.
    async fn update(&self, order: Order) -> Result<Option<Order>>;

    /// Deletes an order by ID.
    ///
    /// The existence check and the delete happen as one atomic step.
    /// Returns false if there was nothing to delete.
    async fn delete(&self, id: OrderId) -> Result<bool>;

    /// Returns the number of stored orders.
    async fn count(&self) -> Result<u64>;
}
