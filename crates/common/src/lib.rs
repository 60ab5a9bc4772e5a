//! Shared types for the order management API.

pub mod order;
pub mod types;

pub use order::{Order, OrderDetails};
pub use types::OrderId;
