//! Order service providing the business operations over an order store.

use common::{Order, OrderDetails, OrderId};
use order_store::OrderStore;

use crate::error::DomainError;

/// Service for managing orders.
///
/// Owns the store handle it is constructed with. Every operation is
/// independent; the only state is the store's contents.
pub struct OrderService<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    /// Creates a new order service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persists a new order and returns it with its assigned ID.
    ///
    /// Field-level validation (name, price) is the caller's job; this only
    /// rejects a missing payload.
    #[tracing::instrument(skip(self))]
    pub async fn place_order(&self, details: Option<OrderDetails>) -> Result<Order, DomainError> {
        let Some(details) = details else {
            let message = "Order details cannot be null.";
            tracing::error!("{message}");
            return Err(DomainError::InvalidInput(message.to_string()));
        };

        let order = self.store.insert(details).await?;

        metrics::counter!("orders_placed_total").increment(1);
        tracing::info!(order_id = %order.id, "order placed");
        Ok(order)
    }

    /// Returns every stored order. An empty store is not an error here.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.store.find_all().await?)
    }

    /// Loads an order by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_order_by_id(&self, id: OrderId) -> Result<Order, DomainError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(DomainError::OrderNotFound(id)))
    }

    /// Loads an order matching both ID and product name.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_id_and_product_name(
        &self,
        id: OrderId,
        product_name: Option<&str>,
    ) -> Result<Order, DomainError> {
        self.store
            .find_by_id_and_product_name(id, product_name)
            .await?
            .ok_or_else(|| {
                not_found(DomainError::OrderNotFoundWithName {
                    id,
                    product_name: product_name.unwrap_or("null").to_string(),
                })
            })
    }

    /// Overwrites every mutable field of an existing order.
    ///
    /// The update is not validated, so a zero price or missing name is
    /// stored as given.
    #[tracing::instrument(skip(self))]
    pub async fn update_order_by_id(
        &self,
        update: OrderDetails,
        id: OrderId,
    ) -> Result<Order, DomainError> {
        let mut order = self.get_order_by_id(id).await?;
        order.overwrite(update);

        // The row can vanish between the lookup and the write.
        let updated = self
            .store
            .update(order)
            .await?
            .ok_or_else(|| not_found(DomainError::OrderNotFound(id)))?;

        metrics::counter!("orders_updated_total").increment(1);
        tracing::info!(order_id = %id, "order updated");
        Ok(updated)
    }

    /// Deletes an order by ID.
    #[tracing::instrument(skip(self))]
    pub async fn delete_order_by_id(&self, id: OrderId) -> Result<(), DomainError> {
        if !self.store.delete(id).await? {
            return Err(not_found(DomainError::OrderNotFound(id)));
        }

        metrics::counter!("orders_deleted_total").increment(1);
        tracing::info!(order_id = %id, "order deleted");
        Ok(())
    }
}

fn not_found(err: DomainError) -> DomainError {
    metrics::counter!("orders_not_found_total").increment(1);
    tracing::debug!(error = %err, "order lookup missed");
    err
}
