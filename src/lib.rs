//! # 产品服务
//!
//! 提供产品创建与排序列表两个 HTTP 接口：
//! - `POST /services/add-product`
//! - `GET /services/list-product/:sort`，sort 取 new / high / low / a-z / z-a

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::create_app;
pub use app::product::{AppState, ProductService};
pub use config::Config;
