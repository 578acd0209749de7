//! 基础设施层：数据库连接池、存储实现与日志

pub mod database;
pub mod logger;
pub mod memory;
pub mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;
