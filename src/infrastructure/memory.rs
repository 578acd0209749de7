//! 内存产品存储
//!
//! 按插入顺序保存行，排序使用稳定排序，相同键保持插入顺序。

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::app::product::model::{NewProduct, Product, ProductUpdate};
use crate::app::product::store::{OrderKey, ProductStore, StoreError};

#[derive(Clone, Default)]
pub struct MemoryProductStore {
    rows: Arc<RwLock<Vec<Product>>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

fn sort_rows(rows: &mut [Product], order: OrderKey) {
    match order.effective() {
        OrderKey::CreatedDesc => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        OrderKey::PriceDesc => rows.sort_by(|a, b| b.price.cmp(&a.price)),
        OrderKey::PriceAsc => rows.sort_by(|a, b| a.price.cmp(&b.price)),
        OrderKey::NameAsc => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        OrderKey::NameDesc => rows.sort_by(|a, b| b.name.cmp(&a.name)),
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: &NewProduct) -> Result<(), StoreError> {
        self.rows.write().await.push(product.clone().into());
        Ok(())
    }

    async fn list(&self, order: OrderKey) -> Result<Vec<Product>, StoreError> {
        let mut rows = self.rows.read().await.clone();
        sort_rows(&mut rows, order);
        Ok(rows)
    }

    async fn get_by_id(&self, id: &str) -> Result<Product, StoreError> {
        self.rows
            .read()
            .await
            .iter()
            .rev()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update_by_id(&self, id: &str, update: &ProductUpdate) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        for row in rows.iter_mut().filter(|row| row.id == id) {
            row.name = update.name.clone();
            row.description = update.description.clone();
            row.price = update.price;
            row.quantity = update.quantity;
            row.updated_at = Some(update.updated_at);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.rows.write().await.retain(|row| row.id != id);
        Ok(())
    }
}
