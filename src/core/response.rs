//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 统一响应信封 `{status, error_code, description, data}`
///
/// `data` 保存负载序列化后的 JSON 字符串，无负载时为 `"null"`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: bool,
    pub error_code: String,
    pub description: String,
    pub data: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: Option<T>) -> Self {
        // Option 与 serde_json::Value 的序列化不会失败
        let data = serde_json::to_string(&data).unwrap_or_else(|_| "null".to_string());
        Self {
            status: true,
            error_code: String::new(),
            description: String::new(),
            data,
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            status: false,
            error_code: String::new(),
            description: description.into(),
            data: String::new(),
        }
    }
}

/// 列表接口的响应 `{status, data}`，未知排序方式时 `data` 为 null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub status: bool,
    pub data: Option<Vec<T>>,
}

impl<T> ListResponse<T> {
    pub fn found(data: Vec<T>) -> Self {
        Self {
            status: true,
            data: Some(data),
        }
    }

    pub fn unmatched() -> Self {
        Self {
            status: false,
            data: None,
        }
    }
}
