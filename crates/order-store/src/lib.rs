pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use common::{Order, OrderDetails, OrderId};
pub use error::{OrderStoreError, Result};
pub use memory::InMemoryOrderStore;
pub use postgres::PostgresOrderStore;
pub use store::OrderStore;
