//! 产品业务服务

use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::model::{NewProduct, ProductRequest, ProductView};
use super::store::{OrderKey, ProductStore};
use crate::core::error::CoreError;
use crate::core::validation::{must_not_empty, not_zero, ValidationError};

/// 产品编号取值范围 [100000, 999999)
pub const PRODUCT_ID_RANGE: std::ops::Range<u32> = 100_000..999_999;

const ADD_PROCESS: &str = "|services|add-product|";
const LIST_PROCESS: &str = "|services|product-list|";

/// 绑定失败与列表查询失败时对外的描述
pub const MISSING_INPUT: &str = "missing input";

/// 解析列表接口的排序参数
pub fn parse_sort_token(token: &str) -> Option<OrderKey> {
    match token {
        "new" => Some(OrderKey::CreatedDesc),
        "high" => Some(OrderKey::PriceDesc),
        "low" => Some(OrderKey::PriceAsc),
        "a-z" => Some(OrderKey::NameAsc),
        "z-a" => Some(OrderKey::NameDesc),
        _ => None,
    }
}

/// 生成 6 位随机产品编号，不检查是否与已有编号冲突
pub fn generate_product_id() -> String {
    rand::rng().random_range(PRODUCT_ID_RANGE).to_string()
}

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// 请求体无法绑定时记录日志并返回错误
    pub fn reject_unbound(reason: &str) -> CoreError {
        debug!(
            section = %format!("{}bind", ADD_PROCESS),
            description = MISSING_INPUT,
            error = reason,
            "request rejected"
        );
        CoreError::BadRequest(MISSING_INPUT.to_string())
    }

    /// 按顺序校验字段，遇到第一个失败即返回
    pub fn validate(input: &ProductRequest) -> Result<(), (&'static str, ValidationError)> {
        must_not_empty(&input.product_name, "product-name").map_err(|e| ("name-mustnotempty", e))?;
        not_zero(input.price, "price").map_err(|e| ("price-notzero", e))?;
        must_not_empty(&input.description, "description")
            .map_err(|e| ("description-mustnotempty", e))?;
        not_zero(input.quantity, "quantity").map_err(|e| ("quantity-notzero", e))?;
        Ok(())
    }

    /// 创建产品：校验 → 生成编号 → 写入存储
    pub async fn create_product(&self, input: ProductRequest) -> Result<(), CoreError> {
        if let Err((step, err)) = Self::validate(&input) {
            debug!(
                section = %format!("{}{}", ADD_PROCESS, step),
                parameters = ?input,
                description = %err,
                "validation failed"
            );
            return Err(err.into());
        }

        let product = NewProduct {
            id: generate_product_id(),
            name: input.product_name.clone(),
            description: input.description.clone(),
            price: input.price,
            quantity: input.quantity,
            created_at: Utc::now(),
            active: true,
        };

        if let Err(e) = self.store.insert(&product).await {
            error!(
                section = %format!("{}result", ADD_PROCESS),
                parameters = ?input,
                description = %e,
                "store insert failed"
            );
            return Err(CoreError::InternalError(e.to_string()));
        }

        info!("Created product {} ({})", product.name, product.id);
        Ok(())
    }

    /// 按排序参数列出全部产品，未知参数返回 `None`
    pub async fn list_products(&self, sort: &str) -> Result<Option<Vec<ProductView>>, CoreError> {
        let Some(order) = parse_sort_token(sort) else {
            debug!("Unknown sort token: {}", sort);
            return Ok(None);
        };

        let rows = self.store.list(order).await.map_err(|e| {
            debug!(
                section = %format!("{}bind", LIST_PROCESS),
                sort,
                description = MISSING_INPUT,
                error = %e,
                "store list failed"
            );
            CoreError::BadRequest(MISSING_INPUT.to_string())
        })?;

        Ok(Some(rows.into_iter().map(ProductView::from).collect()))
    }
}
