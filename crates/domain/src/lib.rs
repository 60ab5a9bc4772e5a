//! Domain layer for the order management API.
//!
//! This crate provides the [`OrderService`], which validates requests,
//! orchestrates calls to an [`order_store::OrderStore`], and raises
//! [`DomainError`]s for the transport layer to map.

pub mod error;
pub mod service;

pub use common::{Order, OrderDetails, OrderId};
pub use error::DomainError;
pub use service::OrderService;
