//! 产品管理：数据模型、存储抽象、业务服务与处理器

pub mod handler;
pub mod model;
pub mod service;
pub mod store;

pub use handler::AppState;
pub use model::{NewProduct, Product, ProductRequest, ProductUpdate, ProductView};
pub use service::ProductService;
pub use store::{OrderKey, ProductStore, StoreError};
