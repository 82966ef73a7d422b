use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::repo_types::{ListOrder, NewProduct, Product};
use crate::db::StoreError;

/// Persistence operations over the `products` table.
///
/// Lookups by id return `Ok(None)` when no row matches; only store failures
/// are reported as errors.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self, order: ListOrder) -> Result<Vec<Product>, StoreError>;
    async fn get(&self, id: i32) -> Result<Option<Product>, StoreError>;
    async fn create(&self, input: NewProduct) -> Result<Product, StoreError>;
    async fn update(&self, id: i32, input: NewProduct) -> Result<Option<Product>, StoreError>;
    async fn delete(&self, id: i32) -> Result<Option<Product>, StoreError>;
}

const LIST_BY_ID: &str = r#"
    SELECT id, name, sku, quantity, price::float8 AS price
    FROM products
    ORDER BY id ASC
"#;

const LIST_BY_NAME: &str = r#"
    SELECT id, name, sku, quantity, price::float8 AS price
    FROM products
    ORDER BY name ASC
"#;

#[derive(Clone)]
pub struct PgProductRepo {
    db: PgPool,
}

impl PgProductRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductStore for PgProductRepo {
    async fn list(&self, order: ListOrder) -> Result<Vec<Product>, StoreError> {
        let sql = match order {
            ListOrder::Id => LIST_BY_ID,
            ListOrder::Name => LIST_BY_NAME,
        };
        let rows = sqlx::query_as::<_, Product>(sql).fetch_all(&self.db).await?;
        debug!(count = rows.len(), ?order, "products listed");
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, sku, quantity, price::float8 AS price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, sku, quantity, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, sku, quantity, price::float8 AS price
            "#,
        )
        .bind(&input.name)
        .bind(&input.sku)
        .bind(input.quantity)
        .bind(input.price)
        .fetch_one(&self.db)
        .await?;
        debug!(product_id = row.id, "product inserted");
        Ok(row)
    }

    async fn update(&self, id: i32, input: NewProduct) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
               SET name = $1, sku = $2, quantity = $3, price = $4
             WHERE id = $5
            RETURNING id, name, sku, quantity, price::float8 AS price
            "#,
        )
        .bind(&input.name)
        .bind(&input.sku)
        .bind(input.quantity)
        .bind(input.price)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            DELETE FROM products
             WHERE id = $1
            RETURNING id, name, sku, quantity, price::float8 AS price
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }
}
