//! 产品存储抽象

use async_trait::async_trait;

use super::model::{NewProduct, Product, ProductUpdate};

/// 列表排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKey {
    CreatedDesc,
    PriceDesc,
    PriceAsc,
    NameAsc,
    NameDesc,
}

/// `NameDesc` 实际读取的排序。
///
/// 线上行为一直是按创建时间倒序而非名称倒序，在确认之前保持不变。
pub const NAME_DESC_RESOLVES_TO: OrderKey = OrderKey::CreatedDesc;

impl OrderKey {
    pub const ALL: [OrderKey; 5] = [
        OrderKey::CreatedDesc,
        OrderKey::PriceDesc,
        OrderKey::PriceAsc,
        OrderKey::NameAsc,
        OrderKey::NameDesc,
    ];

    /// 存储层真正执行的排序
    pub fn effective(self) -> OrderKey {
        match self {
            OrderKey::NameDesc => NAME_DESC_RESOLVES_TO,
            other => other,
        }
    }

    /// SQL ORDER BY 子句
    pub fn order_by_clause(self) -> &'static str {
        match self.effective() {
            OrderKey::CreatedDesc => "created_datetime DESC",
            OrderKey::PriceDesc => "price DESC",
            OrderKey::PriceAsc => "price ASC",
            OrderKey::NameAsc => "product_name ASC",
            OrderKey::NameDesc => "product_name DESC",
        }
    }
}

/// 存储错误，携带出错的操作名
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("{operation}: {message}")]
    Unavailable {
        operation: &'static str,
        message: String,
    },
    #[error("product {0} not found")]
    NotFound(String),
}

impl StoreError {
    pub fn database(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
        move |source| StoreError::Database { operation, source }
    }
}

/// 产品表的读写操作
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 插入一行，不检查 id 是否已存在
    async fn insert(&self, product: &NewProduct) -> Result<(), StoreError>;

    /// 读取整张表（不过滤 active），按 `order` 排序
    async fn list(&self, order: OrderKey) -> Result<Vec<Product>, StoreError>;

    /// 返回最后插入的同 id 行
    async fn get_by_id(&self, id: &str) -> Result<Product, StoreError>;

    /// id 不存在时不报错
    async fn update_by_id(&self, id: &str, update: &ProductUpdate) -> Result<(), StoreError>;

    /// id 不存在时不报错
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}
