use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{Order, OrderDetails, OrderId, Result, store::OrderStore};

/// PostgreSQL-backed order store implementation.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgreSQL order store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        Ok(Order {
            id: OrderId::new(row.try_get("order_id")?),
            product_name: row.try_get("product_name")?,
            product_price: row.try_get("product_price")?,
            order_date: row.try_get("order_date")?,
            shipping_address: row.try_get("shipping_address")?,
        })
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn insert(&self, details: OrderDetails) -> Result<Order> {
        let row = sqlx::query(
            r#"
            INSERT INTO orders (product_name, product_price, order_date, shipping_address)
            VALUES ($1, $2, $3, $4)
            RETURNING order_id, product_name, product_price, order_date, shipping_address
            "#,
        )
        .bind(&details.product_name)
        .bind(details.product_price)
        .bind(details.order_date)
        .bind(&details.shipping_address)
        .fetch_one(&self.pool)
        .await?;

        Self::row_to_order(row)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT order_id, product_name, product_price, order_date, shipping_address
            FROM orders
            ORDER BY order_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT order_id, product_name, product_price, order_date, shipping_address
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_order).transpose()
    }

    async fn find_by_id_and_product_name(
        &self,
        id: OrderId,
        product_name: Option<&str>,
    ) -> Result<Option<Order>> {
        // IS NOT DISTINCT FROM lets a null name match a null column
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT order_id, product_name, product_price, order_date, shipping_address
            FROM orders
            WHERE order_id = $1 AND product_name IS NOT DISTINCT FROM $2::TEXT
            "#,
        )
        .bind(id.as_i64())
        .bind(product_name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_order).transpose()
    }

    async fn update(&self, order: Order) -> Result<Option<Order>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            UPDATE orders
            SET product_name = $2, product_price = $3, order_date = $4, shipping_address = $5
            WHERE order_id = $1
            RETURNING order_id, product_name, product_price, order_date, shipping_address
            "#,
        )
        .bind(order.id.as_i64())
        .bind(&order.product_name)
        .bind(order.product_price)
        .bind(order.order_date)
        .bind(&order.shipping_address)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_order).transpose()
    }

    async fn delete(&self, id: OrderId) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT order_id FROM orders WHERE order_id = $1 FOR UPDATE")
                .bind(id.as_i64())
                .fetch_optional(&mut *tx)
                .await?;

        if existing.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM orders WHERE order_id = $1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(order_id = %id, "order row deleted");
        Ok(true)
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }
}
