//! 产品数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `product` 表中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    #[sqlx(rename = "id_product")]
    pub id: String,
    #[sqlx(rename = "product_name")]
    pub name: String,
    pub price: i32,
    pub description: String,
    pub quantity: i32,
    #[sqlx(rename = "created_datetime")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "updated_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    pub active: bool,
}

/// 待插入的新产品
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl From<NewProduct> for Product {
    fn from(new: NewProduct) -> Self {
        Self {
            id: new.id,
            name: new.name,
            price: new.price,
            description: new.description,
            quantity: new.quantity,
            created_at: new.created_at,
            updated_at: None,
            active: new.active,
        }
    }
}

/// 按 id 更新的字段
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub quantity: i32,
    pub updated_at: DateTime<Utc>,
}

/// 创建产品请求，缺省字段按零值绑定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    pub product_name: String,
    pub price: i32,
    pub description: String,
    pub quantity: i32,
}

/// 对外公开的产品视图，不含时间戳与 active 标记
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductView {
    pub id_product: String,
    pub product_name: String,
    pub price: i32,
    pub description: String,
    pub quantity: i32,
}

impl From<Product> for ProductView {
    fn from(row: Product) -> Self {
        Self {
            id_product: row.id,
            product_name: row.name,
            price: row.price,
            description: row.description,
            quantity: row.quantity,
        }
    }
}
