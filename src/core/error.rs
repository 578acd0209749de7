//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::response::ApiResponse;
use super::validation::ValidationError;

/// 核心错误类型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// 输入缺失、校验失败，或列表查询的下游失败
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 创建产品时的存储失败
    #[error("internal error: {0}")]
    InternalError(String),
}

impl CoreError {
    pub fn message(&self) -> &str {
        match self {
            CoreError::BadRequest(msg) | CoreError::InternalError(msg) => msg,
        }
    }
}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        CoreError::BadRequest(err.message)
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        // 两类错误对外都以 400 返回，error_code 不填
        let description = match self {
            CoreError::BadRequest(msg) | CoreError::InternalError(msg) => msg,
        };

        (
            StatusCode::BAD_REQUEST,
            axum::Json(ApiResponse::failure(description)),
        )
            .into_response()
    }
}
