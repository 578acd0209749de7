//! PostgreSQL 产品存储
//!
//! 期望的表结构：
//!
//! ```sql
//! CREATE TABLE product (
//!     id_product       VARCHAR(25),
//!     product_name     VARCHAR(25),
//!     price            INTEGER,
//!     description      TEXT,
//!     quantity         INTEGER,
//!     created_datetime TIMESTAMPTZ,
//!     updated_datetime TIMESTAMPTZ,
//!     active           BOOLEAN
//! );
//! ```

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use tracing::debug;

use crate::app::product::model::{NewProduct, Product, ProductUpdate};
use crate::app::product::store::{OrderKey, ProductStore, StoreError};

const SELECT_COLUMNS: &str = "SELECT id_product, product_name, price, description, quantity, \
     created_datetime, updated_datetime, active FROM product";

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn list_query(order: OrderKey) -> String {
        format!("{} ORDER BY {}", SELECT_COLUMNS, order.order_by_clause())
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: &NewProduct) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO product (id_product, product_name, description, price, quantity, created_datetime, active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .bind(product.created_at)
        .bind(product.active)
        .execute(&self.pool)
        .await
        .map_err(StoreError::database("insert product"))?;

        debug!("Inserted product {}", product.id);
        Ok(())
    }

    async fn list(&self, order: OrderKey) -> Result<Vec<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&Self::list_query(order))
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::database("list products"))
    }

    async fn get_by_id(&self, id: &str) -> Result<Product, StoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "{} WHERE id_product = $1 ORDER BY created_datetime DESC LIMIT 1",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::database("get product"))?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update_by_id(&self, id: &str, update: &ProductUpdate) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE product SET product_name = $1, description = $2, price = $3, quantity = $4, \
             updated_datetime = $5 WHERE id_product = $6",
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.price)
        .bind(update.quantity)
        .bind(update.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(StoreError::database("update product"))?;

        debug!("Updated product {} ({} rows)", id, result.rows_affected());
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM product WHERE id_product = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::database("delete product"))?;

        debug!("Deleted product {} ({} rows)", id, result.rows_affected());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_reads_whole_table() {
        let sql = PgProductStore::list_query(OrderKey::PriceAsc);
        assert!(sql.ends_with("FROM product ORDER BY price ASC"));
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_z_a_query_orders_by_creation_time() {
        assert_eq!(
            PgProductStore::list_query(OrderKey::NameDesc),
            PgProductStore::list_query(OrderKey::CreatedDesc)
        );
    }
}
