//! Domain error types.

use common::OrderId;
use order_store::OrderStoreError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The request payload cannot be turned into an order.
    #[error("{0}")]
    InvalidInput(String),

    /// No order has the given ID.
    #[error("Order with ID {0} not found.")]
    OrderNotFound(OrderId),

    /// No order has both the given ID and product name.
    #[error("Order with ID {id} and product name {product_name} not found.")]
    OrderNotFoundWithName { id: OrderId, product_name: String },

    /// An error occurred in the order store.
    #[error("Order store error: {0}")]
    Store(#[from] OrderStoreError),
}

impl DomainError {
    /// Returns true for the lookup-miss variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::OrderNotFound(_) | DomainError::OrderNotFoundWithName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages() {
        assert_eq!(
            DomainError::OrderNotFound(OrderId::new(5)).to_string(),
            "Order with ID 5 not found."
        );
        assert_eq!(
            DomainError::OrderNotFoundWithName {
                id: OrderId::new(5),
                product_name: "Laptop".to_string(),
            }
            .to_string(),
            "Order with ID 5 and product name Laptop not found."
        );
    }

    #[test]
    fn is_not_found_classification() {
        assert!(DomainError::OrderNotFound(OrderId::new(1)).is_not_found());
        assert!(!DomainError::InvalidInput("bad".to_string()).is_not_found());
    }
}
