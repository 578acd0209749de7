//! 核心层：错误、响应信封、中间件、请求指标与字段校验

pub mod error;
pub mod metrics;
pub mod middleware;
pub mod response;
pub mod validation;
