//! 产品处理器

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Path, Request, State},
    http::header::CONTENT_TYPE,
    response::Json,
    routing::{get, post},
    Router,
};

use super::{
    model::{ProductRequest, ProductView},
    service::ProductService,
};
use crate::core::{
    error::CoreError,
    response::{ApiResponse, ListResponse},
};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// 按 Content-Type 绑定 JSON、urlencoded 或 multipart 请求体
///
/// 非 JSON 请求体与查询参数合并，同名字段以请求体为准；
/// 没有 Content-Type 时请求体视为空表单，只使用查询参数。
#[derive(Debug)]
pub struct BoundProduct(pub ProductRequest);

#[async_trait]
impl<S> FromRequest<S> for BoundProduct
where
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let bound = if content_type.starts_with("application/json") {
            Json::<ProductRequest>::from_request(req, state)
                .await
                .map(|Json(input)| input)
                .map_err(|e| e.body_text())
        } else {
            bind_form(req, state, &content_type).await
        };

        bound
            .map(BoundProduct)
            .map_err(|reason| ProductService::reject_unbound(&reason))
    }
}

async fn bind_form<S>(req: Request, state: &S, content_type: &str) -> Result<ProductRequest, String>
where
    S: Send + Sync,
{
    let query = req.uri().query().unwrap_or_default().to_string();

    let body = if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| e.body_text())?;
        multipart_fields(multipart).await?
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| e.body_text())?;
        serde_urlencoded::from_bytes::<Vec<(String, String)>>(&bytes).map_err(|e| e.to_string())?
    } else {
        Vec::new()
    };
    let query = serde_urlencoded::from_str::<Vec<(String, String)>>(&query).map_err(|e| e.to_string())?;

    let merged = merge_fields(body, query);
    let encoded = serde_urlencoded::to_string(&merged).map_err(|e| e.to_string())?;
    serde_urlencoded::from_str::<ProductRequest>(&encoded).map_err(|e| e.to_string())
}

/// 读取 multipart 中的文本字段，文件字段忽略
async fn multipart_fields(mut multipart: Multipart) -> Result<Vec<(String, String)>, String> {
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await.map_err(|e| e.body_text())?;
        fields.push((name, value));
    }
    Ok(fields)
}

/// 同名字段只保留第一次出现的值，请求体在前
fn merge_fields(body: Vec<(String, String)>, query: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = Vec::with_capacity(body.len() + query.len());
    for (key, value) in body.into_iter().chain(query) {
        if !merged.iter().any(|(seen, _)| *seen == key) {
            merged.push((key, value));
        }
    }
    merged
}

pub async fn add_product(
    State(state): State<AppState>,
    BoundProduct(input): BoundProduct,
) -> Result<Json<ApiResponse>, CoreError> {
    state.product_service.create_product(input).await?;
    Ok(Json(ApiResponse::success::<()>(None)))
}

pub async fn list_products(
    State(state): State<AppState>,
    Path(sort): Path<String>,
) -> Result<Json<ListResponse<ProductView>>, CoreError> {
    let response = match state.product_service.list_products(&sort).await? {
        Some(products) => ListResponse::found(products),
        None => ListResponse::unmatched(),
    };
    Ok(Json(response))
}

/// 产品相关路由，挂载在 /services 下
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add-product", post(add_product))
        .route("/list-product/:sort", get(list_products))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_body_fields_win_over_query() {
        let merged = merge_fields(
            vec![pair("product_name", "Body"), pair("product_name", "Again")],
            vec![pair("product_name", "Query"), pair("price", "7")],
        );
        assert_eq!(merged, vec![pair("product_name", "Body"), pair("price", "7")]);
    }
}
